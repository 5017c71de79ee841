//! Core traits of the value-object contract.
//!
//! This module defines the capabilities every value type implements
//! independently, instead of inheriting them from a shared base:
//! - Structural equality, hashing and canonical text (`ValueObject` trait)
//! - Chronological comparison for temporal values (`Chronological` trait)
//! - Comparison that can be rejected, for money (`CheckedOrd` trait)
//!
//! All value types keep their fields private and expose no `&mut self`
//! methods, so an instance never changes after construction. Most are
//! `Copy`; those owning text (`Country`, `Address`, `Email`) are `Clone`.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::types::error::ParseError;

/// A value whose identity is its attribute values.
///
/// Equality and hashing are structural: two instances with equal fields are
/// the same value and hash identically. `Display` produces the canonical
/// string and `FromStr` consumes it, forming a round-trip pair.
///
/// # Examples
/// ```
/// use valobs_core::traits::ValueObject;
/// use valobs_core::types::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let text = date.to_canonical_string();
/// assert_eq!(text, "2024-06-15");
/// assert_eq!(Date::from_canonical_str(&text).unwrap(), date);
/// assert_eq!(Date::CANONICAL_PATTERN, "YYYY-MM-DD");
/// ```
pub trait ValueObject:
    Clone + Eq + Hash + Debug + Display + FromStr<Err = ParseError> + Send + Sync
{
    /// The canonical textual pattern, reported by `ParseError::expected`.
    const CANONICAL_PATTERN: &'static str;

    /// Returns the single authoritative textual form of this value.
    fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Parses the canonical textual form, rejecting anything malformed.
    fn from_canonical_str(s: &str) -> Result<Self, ParseError> {
        s.parse()
    }
}

/// A value with a natural chronological order.
///
/// # Examples
/// ```
/// use valobs_core::traits::Chronological;
/// use valobs_core::types::Date;
///
/// let earlier = Date::from_ymd(2024, 1, 1).unwrap();
/// let later = Date::from_ymd(2024, 1, 2).unwrap();
/// assert!(earlier.is_before(&later));
/// assert!(later.is_after(&earlier));
/// assert!(earlier.is_same_instant(&earlier));
/// ```
pub trait Chronological: ValueObject + Ord {
    /// `true` if `self` is strictly earlier than `other`.
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// `true` if `self` is strictly later than `other`.
    fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// `true` if both denote the same point.
    fn is_same_instant(&self, other: &Self) -> bool {
        self == other
    }
}

/// Ordering that is only defined for some pairs of values.
///
/// Unlike `PartialOrd`, an undefined comparison is an error rather than
/// `None`, so `a < b` can never silently evaluate to `false`.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use valobs_core::traits::CheckedOrd;
/// use valobs_core::types::Money;
///
/// let small = Money::of("1.00", "USD").unwrap();
/// let large = Money::of("2.00", "USD").unwrap();
/// let euro = Money::of("2.00", "EUR").unwrap();
///
/// assert_eq!(small.try_cmp(&large).unwrap(), Ordering::Less);
/// assert!(small.try_cmp(&euro).is_err());
/// ```
pub trait CheckedOrd: Sized {
    /// Error returned when the two values cannot be compared.
    type Error;

    /// Compares two values, failing when no order is defined between them.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, Self::Error>;

    /// `Ok(true)` if `self < other`.
    fn try_lt(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// `Ok(true)` if `self > other`.
    fn try_gt(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// Returns the larger of the two values.
    fn try_max(self, other: Self) -> Result<Self, Self::Error> {
        match self.try_cmp(&other)? {
            Ordering::Less => Ok(other),
            _ => Ok(self),
        }
    }

    /// Returns the smaller of the two values.
    fn try_min(self, other: Self) -> Result<Self, Self::Error> {
        match self.try_cmp(&other)? {
            Ordering::Greater => Ok(other),
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Address, Continent, Country, CountryCode, Date, DateTime, Duration, Email, GeoLocation,
        Latitude, Money, Time,
    };
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::Hasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn assert_value_object<T: ValueObject>(a: T, b: T, different: T) {
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, different);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_canonical_string(), b.to_canonical_string());
        assert_eq!(T::from_canonical_str(&a.to_canonical_string()).unwrap(), a);
    }

    #[test]
    fn test_value_object_contract_for_all_types() {
        assert_value_object(
            Date::from_ymd(2024, 2, 29).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap(),
            Date::from_ymd(2024, 3, 1).unwrap(),
        );
        assert_value_object(
            Time::from_hms_milli(8, 30, 0, 250).unwrap(),
            Time::from_hms_milli(8, 30, 0, 250).unwrap(),
            Time::from_hms_milli(8, 30, 0, 251).unwrap(),
        );
        assert_value_object(
            DateTime::from_parts(2024, 12, 31, 23, 59, 59, 999).unwrap(),
            DateTime::from_parts(2024, 12, 31, 23, 59, 59, 999).unwrap(),
            DateTime::from_parts(2025, 1, 1, 0, 0, 0, 0).unwrap(),
        );
        assert_value_object(
            Duration::from_minutes(90).unwrap(),
            Duration::from_parts(0, 1, 30, 0, 0).unwrap(),
            Duration::from_minutes(-90).unwrap(),
        );
        assert_value_object(
            Money::of("19.99", "USD").unwrap(),
            Money::of("19.990", "usd").unwrap(),
            Money::of("19.99", "EUR").unwrap(),
        );
    }

    #[test]
    fn test_value_object_contract_for_geographic_types() {
        assert_value_object(
            Latitude::new(0.0).unwrap(),
            Latitude::new(-0.0).unwrap(),
            Latitude::new(0.5).unwrap(),
        );
        assert_value_object(
            GeoLocation::new(48.8584, 2.2945, 35.0).unwrap(),
            GeoLocation::new(48.8584, 2.2945, 35.0).unwrap(),
            GeoLocation::new_without_altitude(48.8584, 2.2945).unwrap(),
        );
        assert_value_object(Continent::Asia, Continent::Asia, Continent::Oceania);
        assert_value_object(
            CountryCode::new("NZ").unwrap(),
            CountryCode::new("NZ").unwrap(),
            CountryCode::new("AU").unwrap(),
        );
        assert_value_object(
            Country::new("NZ", "New Zealand").unwrap(),
            Country::new("NZ", " New Zealand").unwrap(),
            Country::new("NZ", "Aotearoa").unwrap(),
        );

        let nz = Country::new("NZ", "New Zealand").unwrap();
        assert_value_object(
            Address::new("1 Queen St", "Auckland", None, "1010", nz.clone()).unwrap(),
            Address::new("1 Queen St ", "Auckland", Some(""), "1010", nz.clone()).unwrap(),
            Address::new("1 Queen St", "Auckland", Some("Auckland"), "1010", nz).unwrap(),
        );
        assert_value_object(
            Email::new("kia.ora@example.nz").unwrap(),
            Email::new("Kia.Ora@Example.NZ").unwrap(),
            Email::new("kia.ora@example.com").unwrap(),
        );
    }

    #[test]
    fn test_value_objects_as_map_keys() {
        let mut holidays = HashMap::new();
        holidays.insert(Date::from_ymd(2024, 12, 25).unwrap(), "Christmas");
        holidays.insert(Date::from_ymd(2024, 12, 25).unwrap(), "Christmas Day");

        assert_eq!(holidays.len(), 1);
        assert_eq!(
            holidays.get(&Date::from_ymd(2024, 12, 25).unwrap()),
            Some(&"Christmas Day")
        );
    }

    #[test]
    fn test_chronological_defaults() {
        let morning = Time::from_hm(9, 0).unwrap();
        let evening = Time::from_hm(18, 0).unwrap();

        assert!(morning.is_before(&evening));
        assert!(!morning.is_after(&evening));
        assert!(!morning.is_same_instant(&evening));
    }

    #[test]
    fn test_checked_ord_min_max() {
        let one = Money::of("1.00", "GBP").unwrap();
        let two = Money::of("2.00", "GBP").unwrap();

        assert_eq!(one.try_max(two).unwrap(), two);
        assert_eq!(one.try_min(two).unwrap(), one);
        assert!(one.try_lt(&two).unwrap());
        assert!(two.try_gt(&one).unwrap());

        let yen = Money::of("2", "JPY").unwrap();
        assert!(one.try_max(yen).is_err());
    }

    #[test]
    fn test_value_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Date>();
        assert_send_sync::<Time>();
        assert_send_sync::<DateTime>();
        assert_send_sync::<Duration>();
        assert_send_sync::<Money>();
        assert_send_sync::<GeoLocation>();
        assert_send_sync::<Address>();
        assert_send_sync::<Email>();
    }
}
