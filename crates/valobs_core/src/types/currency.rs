//! Currency types for monetary values.
//!
//! This module provides ISO 4217 currency codes with their minor-unit
//! counts, which bound the precision a `Money` amount may carry.
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.decimal_places(), 0);  // Yen has no minor unit
//!
//! let kwd = Currency::KWD;
//! assert_eq!(kwd.decimal_places(), 3);  // Dinar has 1000 fils
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes with minor-unit metadata.
///
/// The set is closed: any code not listed here is rejected with
/// [`CurrencyError::UnknownCurrency`].
///
/// # Examples
///
/// ```
/// use valobs_core::types::currency::Currency;
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
///
/// // Unknown currency returns error
/// assert!("XYZ".parse::<Currency>().is_err());
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// British Pound Sterling (2 decimal places)
    GBP,
    /// Japanese Yen (0 decimal places)
    JPY,
    /// Swiss Franc (2 decimal places)
    CHF,
    /// Australian Dollar (2 decimal places)
    AUD,
    /// Canadian Dollar (2 decimal places)
    CAD,
    /// Chinese Yuan Renminbi (2 decimal places)
    CNY,
    /// Hong Kong Dollar (2 decimal places)
    HKD,
    /// New Zealand Dollar (2 decimal places)
    NZD,
    /// Swedish Krona (2 decimal places)
    SEK,
    /// Norwegian Krone (2 decimal places)
    NOK,
    /// Danish Krone (2 decimal places)
    DKK,
    /// Singapore Dollar (2 decimal places)
    SGD,
    /// Indian Rupee (2 decimal places)
    INR,
    /// Mexican Peso (2 decimal places)
    MXN,
    /// Brazilian Real (2 decimal places)
    BRL,
    /// South African Rand (2 decimal places)
    ZAR,
    /// South Korean Won (0 decimal places)
    KRW,
    /// Bahraini Dinar (3 decimal places)
    BHD,
    /// Kuwaiti Dinar (3 decimal places)
    KWD,
}

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Currency; 21] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CHF,
        Currency::AUD,
        Currency::CAD,
        Currency::CNY,
        Currency::HKD,
        Currency::NZD,
        Currency::SEK,
        Currency::NOK,
        Currency::DKK,
        Currency::SGD,
        Currency::INR,
        Currency::MXN,
        Currency::BRL,
        Currency::ZAR,
        Currency::KRW,
        Currency::BHD,
        Currency::KWD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.code(), "USD");
    /// assert_eq!(Currency::KRW.code(), "KRW");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::SGD => "SGD",
            Currency::INR => "INR",
            Currency::MXN => "MXN",
            Currency::BRL => "BRL",
            Currency::ZAR => "ZAR",
            Currency::KRW => "KRW",
            Currency::BHD => "BHD",
            Currency::KWD => "KWD",
        }
    }

    /// Returns the number of minor-unit digits for this currency.
    ///
    /// Most currencies use 2 decimal places; JPY and KRW use 0, the
    /// Gulf dinars use 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.decimal_places(), 2);
    /// assert_eq!(Currency::JPY.decimal_places(), 0);
    /// assert_eq!(Currency::BHD.decimal_places(), 3);
    /// ```
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY | Currency::KRW => 0,
            Currency::BHD | Currency::KWD => 3,
            _ => 2,
        }
    }

    /// Returns the number of minor units in one major unit (`10^decimal_places`).
    pub fn minor_units_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::currency::Currency;
    ///
    /// let usd: Currency = "USD".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// let result: Result<Currency, _> = "XYZ".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let code = s.to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::JPY.code(), "JPY");
        assert_eq!(Currency::KWD.code(), "KWD");
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::CHF.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::KRW.decimal_places(), 0);
        assert_eq!(Currency::BHD.decimal_places(), 3);
        assert_eq!(Currency::KWD.decimal_places(), 3);
    }

    #[test]
    fn test_minor_units_per_major() {
        assert_eq!(Currency::USD.minor_units_per_major(), 100);
        assert_eq!(Currency::JPY.minor_units_per_major(), 1);
        assert_eq!(Currency::KWD.minor_units_per_major(), 1000);
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("gbP".parse::<Currency>().unwrap(), Currency::GBP);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        for code in ["XYZ", "", "US", "USDD", "U$D"] {
            match code.parse::<Currency>() {
                Err(CurrencyError::UnknownCurrency(given)) => assert_eq!(given, code),
                other => panic!("Expected UnknownCurrency for {:?}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::BHD), "BHD");
    }

    #[test]
    fn test_currency_roundtrip() {
        for currency in Currency::ALL {
            let parsed: Currency = currency.code().parse().unwrap();
            assert_eq!(currency, parsed);
        }
    }

    #[test]
    fn test_all_codes_are_unique_three_letters() {
        use std::collections::HashSet;
        let codes: HashSet<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Currency::ALL.len());
        assert!(codes
            .iter()
            .all(|code| code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_currency_serde_roundtrip() {
            let json = serde_json::to_string(&Currency::USD).unwrap();
            assert_eq!(json, "\"USD\"");

            for currency in Currency::ALL {
                let json = serde_json::to_string(&currency).unwrap();
                let parsed: Currency = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, currency);
            }
        }
    }
}
