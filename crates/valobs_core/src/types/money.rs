//! Monetary amounts held as integer minor units.
//!
//! This module provides:
//! - `Money`: An amount in minor units (cents, pence, fils, ...) with its currency
//! - Currency-checked addition, subtraction and comparison
//! - Scalar multiplication and division with round-half-to-even
//!
//! # Rounding
//!
//! Amounts are never held in binary floating point. Scalars are exact
//! `rust_decimal::Decimal` values; the product (or quotient) is computed
//! exactly on the minor-unit count, without `Decimal`'s 28-digit limit, and
//! rounded once, to a whole minor unit, with round-half-to-even (banker's
//! rounding).
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use valobs_core::types::{Currency, Money};
//!
//! let price = Money::of("0.10", "USD").unwrap();
//! assert_eq!(price.multiply_int(3).unwrap(), Money::of("0.30", "USD").unwrap());
//!
//! // 0.125 rounds to the even cent, 0.12
//! let eighth = Money::of("1.00", "USD").unwrap().multiply(Decimal::new(125, 3)).unwrap();
//! assert_eq!(eighth.to_string(), "0.12 USD");
//!
//! assert_eq!(Money::from_minor_units(1999, Currency::USD).to_string(), "19.99 USD");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::{CurrencyError, MoneyError, ParseError};
use super::scan::{no_leading_zero, signed_digits};
use super::wide::mul_div_half_even;
use crate::traits::{CheckedOrd, ValueObject};

/// An amount of money in a specific currency.
///
/// Equal only when both the amount and the currency match; `10.00 USD` and
/// `10.00 EUR` are different values. There is no `PartialOrd`: use
/// [`CheckedOrd::try_cmp`], which rejects mismatched currencies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    /// Creates money from an exact decimal amount.
    ///
    /// Trailing zeros do not count as precision: `10.000 USD` is accepted as
    /// `10.00 USD`, while `10.005 USD` is rejected.
    ///
    /// # Returns
    /// `Err(MoneyError::InvalidAmount)` if the amount has more fractional
    /// digits than the currency's minor unit, or does not fit in `i64` minor
    /// units.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use valobs_core::types::{Currency, Money};
    ///
    /// let ten = Money::new(Decimal::new(1000, 2), Currency::USD).unwrap();
    /// assert_eq!(ten.minor_units(), 1000);
    ///
    /// assert!(Money::new(Decimal::new(10005, 3), Currency::USD).is_err());
    /// assert!(Money::new(Decimal::new(15, 1), Currency::JPY).is_err());
    /// ```
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        let invalid = |reason: String| MoneyError::InvalidAmount {
            amount: amount.to_string(),
            currency,
            reason,
        };

        let places = currency.decimal_places();
        if amount.normalize().scale() > places {
            return Err(invalid(format!("at most {} decimal places", places)));
        }

        amount
            .checked_mul(Decimal::from(currency.minor_units_per_major()))
            .and_then(|minor| minor.to_i64())
            .map(|minor_units| Self::from_minor_units(minor_units, currency))
            .ok_or_else(|| invalid("out of range".to_string()))
    }

    /// Creates money from a decimal string and a currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::{Money, MoneyError};
    ///
    /// let price = Money::of("19.99", "usd").unwrap();
    /// assert_eq!(price.to_string(), "19.99 USD");
    ///
    /// assert!(matches!(Money::of("19.99", "XYZ"), Err(MoneyError::InvalidCurrency(_))));
    /// assert!(matches!(Money::of("19.999", "USD"), Err(MoneyError::InvalidAmount { .. })));
    /// assert!(matches!(Money::of("lots", "USD"), Err(MoneyError::InvalidAmount { .. })));
    /// ```
    pub fn of(amount: &str, currency: &str) -> Result<Self, MoneyError> {
        let currency: Currency = currency.parse()?;
        let amount = Decimal::from_str_exact(amount).map_err(|e| MoneyError::InvalidAmount {
            amount: amount.to_string(),
            currency,
            reason: e.to_string(),
        })?;
        Self::new(amount, currency)
    }

    /// Creates money from a count of minor units, e.g. cents.
    pub fn from_minor_units(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::from_minor_units(0, currency)
    }

    /// Parses the canonical form `<amount> <CODE>`.
    ///
    /// The amount carries exactly the currency's number of decimal places
    /// and the code is three upper-case letters, separated by one space.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::Money;
    ///
    /// assert_eq!(Money::parse("19.99 USD").unwrap().minor_units(), 1999);
    /// assert_eq!(Money::parse("-5 JPY").unwrap().minor_units(), -5);
    /// assert!(Money::parse("19.9 USD").is_err());
    /// assert!(Money::parse("19.99USD").is_err());
    /// assert!(Money::parse("19.99 usd").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: &str| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let (amount, code) = s
            .split_once(' ')
            .ok_or_else(|| fail("missing space before currency code"))?;
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(fail("currency code must be three upper-case letters"));
        }
        let currency: Currency = code
            .parse()
            .map_err(|e: CurrencyError| fail(&e.to_string()))?;

        let places = currency.decimal_places() as usize;
        let (whole, fraction) = match amount.split_once('.') {
            Some((whole, fraction)) if places > 0 && fraction.len() == places => {
                (whole, fraction)
            }
            None if places == 0 => (amount, ""),
            _ => return Err(fail("amount must have exactly the currency's decimal places")),
        };
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail("malformed amount"));
        }
        let (negative, digits) = signed_digits(whole).ok_or_else(|| fail("malformed amount"))?;
        if whole.starts_with('+') {
            return Err(fail("amount must not carry '+'"));
        }
        if !no_leading_zero(digits) {
            return Err(fail("leading zeros are not canonical"));
        }

        let magnitude: i128 = format!("{}{}", digits, fraction)
            .parse()
            .map_err(|_| fail("amount out of range"))?;
        if negative && magnitude == 0 {
            return Err(fail("negative zero is not canonical"));
        }
        let minor_units = i64::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| fail("amount out of range"))?;
        Ok(Self::from_minor_units(minor_units, currency))
    }

    /// Returns the exact amount in major units.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use valobs_core::types::Money;
    ///
    /// let price = Money::of("19.99", "USD").unwrap();
    /// assert_eq!(price.amount(), Decimal::new(1999, 2));
    /// ```
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.minor_units, self.currency.decimal_places())
    }

    /// Returns the amount as a count of minor units.
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// `true` if the amount is above zero.
    pub fn is_positive(&self) -> bool {
        self.minor_units > 0
    }

    /// `true` if the amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.minor_units < 0
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Returns
    /// `Err(MoneyError::CurrencyMismatch)` if the currencies differ; there is
    /// no implicit conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::{Money, MoneyError};
    ///
    /// let ten = Money::of("10.00", "USD").unwrap();
    /// let five = Money::of("5.00", "USD").unwrap();
    /// assert_eq!(ten.checked_add(five).unwrap(), Money::of("15.00", "USD").unwrap());
    ///
    /// let euros = Money::of("5.00", "EUR").unwrap();
    /// assert!(matches!(ten.checked_add(euros), Err(MoneyError::CurrencyMismatch { .. })));
    /// ```
    pub fn checked_add(self, other: Money) -> Result<Self, MoneyError> {
        self.ensure_same_currency(&other)?;
        self.minor_units
            .checked_add(other.minor_units)
            .map(|minor_units| Self::from_minor_units(minor_units, self.currency))
            .ok_or(MoneyError::Overflow(self.currency))
    }

    /// Subtracts an amount of the same currency.
    pub fn checked_sub(self, other: Money) -> Result<Self, MoneyError> {
        self.ensure_same_currency(&other)?;
        self.minor_units
            .checked_sub(other.minor_units)
            .map(|minor_units| Self::from_minor_units(minor_units, self.currency))
            .ok_or(MoneyError::Overflow(self.currency))
    }

    /// Returns the amount with its sign flipped.
    pub fn negate(self) -> Result<Self, MoneyError> {
        self.multiply_int(-1)
    }

    /// Returns the absolute amount.
    pub fn abs(self) -> Result<Self, MoneyError> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(self)
        }
    }

    /// Multiplies by an integer; exact, no rounding involved.
    pub fn multiply_int(self, factor: i64) -> Result<Self, MoneyError> {
        self.minor_units
            .checked_mul(factor)
            .map(|minor_units| Self::from_minor_units(minor_units, self.currency))
            .ok_or(MoneyError::Overflow(self.currency))
    }

    /// Multiplies by an exact decimal factor, rounding half-to-even to a
    /// whole minor unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use valobs_core::types::Money;
    ///
    /// let half = Decimal::new(5, 1);
    /// // 2.5 cents -> 2 cents, 7.5 cents -> 8 cents
    /// assert_eq!(Money::of("0.05", "USD").unwrap().multiply(half).unwrap().minor_units(), 2);
    /// assert_eq!(Money::of("0.15", "USD").unwrap().multiply(half).unwrap().minor_units(), 8);
    /// ```
    pub fn multiply(self, factor: Decimal) -> Result<Self, MoneyError> {
        self.scaled(factor.mantissa(), 10i128.pow(factor.scale()))
    }

    /// Divides by an exact decimal divisor, rounding half-to-even to a whole
    /// minor unit.
    ///
    /// # Returns
    /// `Err(MoneyError::DivisionByZero)` if `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use valobs_core::types::Money;
    ///
    /// let bill = Money::of("10.00", "USD").unwrap();
    /// assert_eq!(bill.divide(Decimal::from(3)).unwrap().to_string(), "3.33 USD");
    /// assert!(bill.divide(Decimal::ZERO).is_err());
    /// ```
    pub fn divide(self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.scaled(10i128.pow(divisor.scale()), divisor.mantissa())
    }

    /// `minor_units * numerator / denominator`, rounded once.
    fn scaled(self, numerator: i128, denominator: i128) -> Result<Self, MoneyError> {
        mul_div_half_even(self.minor_units, numerator, denominator)
            .map(|minor_units| Self::from_minor_units(minor_units, self.currency))
            .ok_or(MoneyError::Overflow(self.currency))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }
}

impl CheckedOrd for Money {
    type Error = MoneyError;

    /// Orders by amount; fails with `CurrencyMismatch` across currencies.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.minor_units.cmp(&other.minor_units))
    }
}

impl FromStr for Money {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Money::parse(s)
    }
}

impl fmt::Display for Money {
    /// Formats as `<amount> <CODE>` with the currency's fixed decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let magnitude = self.minor_units.unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            return write!(f, "{}{} {}", sign, magnitude, self.currency);
        }

        let per_major = self.currency.minor_units_per_major() as u64;
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            magnitude / per_major,
            magnitude % per_major,
            self.currency,
            width = places
        )
    }
}

impl ValueObject for Money {
    const CANONICAL_PATTERN: &'static str = "<amount with fixed decimals> <CCY>";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: &str) -> Money {
        Money::of(amount, "USD").unwrap()
    }

    #[test]
    fn test_construction_precision() {
        assert_eq!(usd("19.99").minor_units(), 1999);
        assert_eq!(usd("19.990").minor_units(), 1999);
        assert_eq!(usd("20").minor_units(), 2000);
        assert_eq!(Money::of("1500", "JPY").unwrap().minor_units(), 1500);
        assert_eq!(Money::of("1.250", "KWD").unwrap().minor_units(), 1250);

        assert!(matches!(
            Money::of("19.995", "USD"),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(matches!(
            Money::of("0.5", "JPY"),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(matches!(
            Money::of("0.0001", "KWD"),
            Err(MoneyError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_construction_out_of_range() {
        let huge = Decimal::from(i64::MAX);
        assert!(matches!(
            Money::new(huge, Currency::USD),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(Money::new(huge, Currency::JPY).is_ok());
    }

    #[test]
    fn test_unknown_currency() {
        match Money::of("1.00", "ABC") {
            Err(MoneyError::InvalidCurrency(CurrencyError::UnknownCurrency(code))) => {
                assert_eq!(code, "ABC")
            }
            other => panic!("Expected InvalidCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_equality_requires_same_currency() {
        assert_eq!(usd("10.00"), usd("10"));
        assert_ne!(usd("10.00"), Money::of("10.00", "EUR").unwrap());
        assert_ne!(usd("10.00"), usd("10.01"));
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(usd("10.00").checked_add(usd("5.00")).unwrap(), usd("15.00"));
        assert_eq!(usd("10.00").checked_sub(usd("15.50")).unwrap(), usd("-5.50"));
        assert_eq!(
            usd("10.00").checked_add(Money::zero(Currency::USD)).unwrap(),
            usd("10.00")
        );
    }

    #[test]
    fn test_currency_mismatch() {
        let euros = Money::of("5.00", "EUR").unwrap();
        let expected = MoneyError::CurrencyMismatch {
            left: Currency::USD,
            right: Currency::EUR,
        };
        assert_eq!(usd("10.00").checked_add(euros), Err(expected.clone()));
        assert_eq!(usd("10.00").checked_sub(euros), Err(expected.clone()));
        assert_eq!(usd("10.00").try_cmp(&euros), Err(expected));
    }

    #[test]
    fn test_overflow() {
        let max = Money::from_minor_units(i64::MAX, Currency::USD);
        let cent = Money::from_minor_units(1, Currency::USD);
        assert_eq!(max.checked_add(cent), Err(MoneyError::Overflow(Currency::USD)));
        assert!(max.multiply_int(2).is_err());
        assert!(max.multiply(Decimal::new(15, 1)).is_err());
        assert!(Money::from_minor_units(i64::MIN, Currency::USD).negate().is_err());
    }

    #[test]
    fn test_multiply_rounding_boundary() {
        assert_eq!(usd("0.10").multiply(Decimal::from(3)).unwrap(), usd("0.30"));
        assert_eq!(usd("0.10").multiply_int(3).unwrap(), usd("0.30"));

        // 1.005 * 1 cent-scale: 100.5 cents -> 100 (even), 101.5 -> 102
        assert_eq!(usd("1.00").multiply(Decimal::new(1005, 3)).unwrap(), usd("1.00"));
        assert_eq!(usd("1.00").multiply(Decimal::new(1015, 3)).unwrap(), usd("1.02"));

        // Negative amounts round half-to-even symmetrically
        assert_eq!(usd("-0.05").multiply(Decimal::new(5, 1)).unwrap(), usd("-0.02"));
        assert_eq!(usd("-0.15").multiply(Decimal::new(5, 1)).unwrap(), usd("-0.08"));

        // Non-midpoints round to nearest
        assert_eq!(usd("10.00").multiply(Decimal::new(3333, 4)).unwrap(), usd("3.33"));
        assert_eq!(usd("10.00").multiply(Decimal::new(6667, 4)).unwrap(), usd("6.67"));
    }

    #[test]
    fn test_multiply_rounds_once_at_full_precision() {
        // 5 * 2.6999999999999999999999999999 = 13.4999999999999999999999999995,
        // which is below the midpoint even though it needs 30 digits
        let factor = Decimal::from_str("2.6999999999999999999999999999").unwrap();
        assert_eq!(
            Money::from_minor_units(5, Currency::USD).multiply(factor).unwrap().minor_units(),
            13
        );
        let factor = Decimal::from_str("2.5000000000000000000000000001").unwrap();
        assert_eq!(
            Money::from_minor_units(5, Currency::USD).multiply(factor).unwrap().minor_units(),
            13
        );
    }

    #[test]
    fn test_multiply_by_wide_unit_factor() {
        let one = Decimal::from_str_exact("1.0000000000000000000000000000").unwrap();
        assert_eq!(one.scale(), 28);
        let large = Money::from_minor_units(1_000_000_000_000_000, Currency::USD);
        assert_eq!(large.multiply(one).unwrap(), large);
        let max = Money::from_minor_units(i64::MAX, Currency::USD);
        assert_eq!(max.multiply(one).unwrap(), max);
        assert_eq!(max.divide(one).unwrap(), max);
    }

    #[test]
    fn test_divide_rounds_once_at_full_precision() {
        // i64::MAX / 2.0000000000000000000000000001 lies just below 4611686018427387903.5
        let divisor = Decimal::from_str("2.0000000000000000000000000001").unwrap();
        let max = Money::from_minor_units(i64::MAX, Currency::USD);
        assert_eq!(max.divide(divisor).unwrap().minor_units(), 4_611_686_018_427_387_903);

        // 1 / 3 of a cent rounds to zero, 2 / 3 to one
        assert_eq!(usd("0.01").divide(Decimal::from(3)).unwrap(), usd("0"));
        assert_eq!(usd("0.02").divide(Decimal::from(3)).unwrap(), usd("0.01"));
    }

    #[test]
    fn test_divide_by_small_divisor_overflows() {
        let max = Money::from_minor_units(i64::MAX, Currency::USD);
        assert_eq!(
            max.divide(Decimal::new(5, 1)),
            Err(MoneyError::Overflow(Currency::USD))
        );
        assert_eq!(
            Money::from_minor_units(1, Currency::USD).divide(Decimal::new(1, 28)),
            Err(MoneyError::Overflow(Currency::USD))
        );
    }

    #[test]
    fn test_divide() {
        assert_eq!(usd("10.00").divide(Decimal::from(4)).unwrap(), usd("2.50"));
        assert_eq!(usd("0.05").divide(Decimal::from(2)).unwrap(), usd("0.02"));
        assert_eq!(usd("0.07").divide(Decimal::from(2)).unwrap(), usd("0.04"));
        assert_eq!(usd("1.00").divide(Decimal::new(-3, 0)).unwrap(), usd("-0.33"));
        assert_eq!(usd("1.00").divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_zero_decimal_currency_rounding() {
        let yen = Money::of("125", "JPY").unwrap();
        assert_eq!(yen.multiply(Decimal::new(1, 1)).unwrap().to_string(), "12 JPY");
        assert_eq!(yen.multiply(Decimal::new(3, 1)).unwrap().to_string(), "38 JPY");
    }

    #[test]
    fn test_try_cmp() {
        assert_eq!(usd("1.00").try_cmp(&usd("2.00")).unwrap(), Ordering::Less);
        assert_eq!(usd("2.00").try_cmp(&usd("2.00")).unwrap(), Ordering::Equal);
        assert_eq!(usd("-2.00").try_cmp(&usd("-3.00")).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_sign_helpers() {
        assert!(usd("0.00").is_zero());
        assert!(usd("0.01").is_positive());
        assert!(usd("-0.01").is_negative());
        assert_eq!(usd("-0.01").abs().unwrap(), usd("0.01"));
        assert_eq!(usd("0.01").abs().unwrap(), usd("0.01"));
        assert_eq!(usd("0.01").negate().unwrap(), usd("-0.01"));
    }

    #[test]
    fn test_display() {
        assert_eq!(usd("19.99").to_string(), "19.99 USD");
        assert_eq!(usd("-5").to_string(), "-5.00 USD");
        assert_eq!(usd("-0.05").to_string(), "-0.05 USD");
        assert_eq!(usd("0").to_string(), "0.00 USD");
        assert_eq!(Money::of("1000", "JPY").unwrap().to_string(), "1000 JPY");
        assert_eq!(Money::of("-1.05", "BHD").unwrap().to_string(), "-1.050 BHD");
        assert_eq!(
            Money::from_minor_units(i64::MIN, Currency::USD).to_string(),
            "-92233720368547758.08 USD"
        );
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(Money::parse("19.99 USD").unwrap(), usd("19.99"));
        assert_eq!(Money::parse("-0.05 USD").unwrap(), usd("-0.05"));
        assert_eq!(
            Money::parse("1.250 KWD").unwrap(),
            Money::of("1.25", "KWD").unwrap()
        );
        assert_eq!(
            Money::parse("-92233720368547758.08 USD").unwrap(),
            Money::from_minor_units(i64::MIN, Currency::USD)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for input in [
            "",
            "19.99",
            "USD",
            "19.99 XYZ",
            "19.99 usd",
            "19.99  USD",
            "19.99 USD ",
            "19.9 USD",
            "19.999 USD",
            "19 USD",
            "19. USD",
            ".99 USD",
            "+19.99 USD",
            "1,000.00 USD",
            "19.99 JPY",
            "1e3 JPY",
            "19.-9 USD",
            "99999999999999999999.00 USD",
        ] {
            let err = Money::parse(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_parse_rejects_non_canonical_spellings() {
        for input in ["-0.00 USD", "0019.99 USD", "00.50 USD", "-0 JPY", "01 JPY", "-0.000 KWD"] {
            assert!(Money::parse(input).is_err(), "accepted {}", input);
        }
        assert_eq!(Money::parse("0.00 USD").unwrap(), Money::zero(Currency::USD));
        assert_eq!(Money::parse("0 JPY").unwrap(), Money::zero(Currency::JPY));
        assert_eq!(Money::parse("0.50 USD").unwrap(), usd("0.5"));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_money_serde_roundtrip() {
            let price = usd("19.99");
            let json = serde_json::to_string(&price).unwrap();
            assert_eq!(json, "\"19.99 USD\"");
            assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), price);
            assert!(serde_json::from_str::<Money>("\"19.999 USD\"").is_err());
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn currency_strategy() -> impl Strategy<Value = Currency> {
            proptest::sample::select(Currency::ALL.to_vec())
        }

        /// Half-even `numerator / denominator` where both fit `i128`.
        fn reference_half_even(numerator: i128, denominator: i128) -> Option<i64> {
            let (numerator, denominator) = if denominator < 0 {
                (-numerator, -denominator)
            } else {
                (numerator, denominator)
            };
            let floor = numerator.div_euclid(denominator);
            let twice_rem = 2 * numerator.rem_euclid(denominator);
            let rounded = match twice_rem.cmp(&denominator) {
                Ordering::Greater => floor + 1,
                Ordering::Equal => floor + (floor & 1),
                Ordering::Less => floor,
            };
            i64::try_from(rounded).ok()
        }

        fn money_strategy() -> impl Strategy<Value = Money> {
            (any::<i64>(), currency_strategy())
                .prop_map(|(minor, currency)| Money::from_minor_units(minor, currency))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_canonical_roundtrip(money in money_strategy()) {
                prop_assert_eq!(Money::parse(&money.to_string()).unwrap(), money);
            }

            #[test]
            fn test_amount_roundtrip(money in money_strategy()) {
                prop_assert_eq!(Money::new(money.amount(), money.currency()).unwrap(), money);
            }

            #[test]
            fn test_add_commutes(
                a in -1_000_000_000_000i64..1_000_000_000_000i64,
                b in -1_000_000_000_000i64..1_000_000_000_000i64,
            ) {
                let a = Money::from_minor_units(a, Currency::EUR);
                let b = Money::from_minor_units(b, Currency::EUR);
                prop_assert_eq!(a.checked_add(b).unwrap(), b.checked_add(a).unwrap());
                prop_assert_eq!(a.checked_add(b).unwrap().checked_sub(b).unwrap(), a);
            }

            #[test]
            fn test_integer_factor_is_exact(
                minor in -1_000_000_000i64..1_000_000_000i64,
                factor in -1000i64..1000i64,
            ) {
                let money = Money::from_minor_units(minor, Currency::GBP);
                prop_assert_eq!(
                    money.multiply(Decimal::from(factor)).unwrap(),
                    money.multiply_int(factor).unwrap()
                );
            }

            #[test]
            fn test_halving_rounds_half_to_even(minor in -1_000_000_000i64..1_000_000_000i64) {
                let money = Money::from_minor_units(minor, Currency::USD);
                let floor = minor.div_euclid(2);
                let expected = if minor % 2 == 0 || floor % 2 == 0 { floor } else { floor + 1 };
                prop_assert_eq!(
                    money.multiply(Decimal::new(5, 1)).unwrap().minor_units(),
                    expected
                );
                prop_assert_eq!(
                    money.divide(Decimal::from(2)).unwrap().minor_units(),
                    expected
                );
            }

            #[test]
            fn test_multiply_matches_exact_reference(
                minor in any::<i64>(),
                mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
                scale in 0u32..=12,
            ) {
                let factor = Decimal::new(mantissa, scale);
                let expected = reference_half_even(
                    i128::from(minor) * i128::from(mantissa),
                    10i128.pow(scale),
                );
                let actual = Money::from_minor_units(minor, Currency::USD)
                    .multiply(factor)
                    .ok()
                    .map(|money| money.minor_units());
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn test_divide_matches_exact_reference(
                minor in any::<i64>(),
                mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
                scale in 0u32..=12,
            ) {
                prop_assume!(mantissa != 0);
                let divisor = Decimal::new(mantissa, scale);
                let expected = reference_half_even(
                    i128::from(minor) * 10i128.pow(scale),
                    i128::from(mantissa),
                );
                let actual = Money::from_minor_units(minor, Currency::USD)
                    .divide(divisor)
                    .ok()
                    .map(|money| money.minor_units());
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn test_mismatched_currencies_never_combine(
                a in money_strategy(),
                b in money_strategy(),
            ) {
                prop_assume!(a.currency() != b.currency());
                prop_assert!(a.checked_add(b).is_err());
                prop_assert!(a.try_cmp(&b).is_err());
                prop_assert_ne!(a, b);
            }
        }
    }
}
