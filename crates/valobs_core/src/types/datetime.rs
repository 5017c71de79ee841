//! Date and time of day, composed.
//!
//! `DateTime` owns one `Date` and one `Time`. Duration arithmetic lets the
//! time absorb the sub-day part and hands the day carry to
//! [`Date::add_days`], so month, year and leap-year boundaries are handled in
//! one place.
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::{DateTime, Duration};
//!
//! let start: DateTime = "2024-02-28T23:30:00.000".parse().unwrap();
//! let end = start.checked_add(Duration::from_hours(2).unwrap()).unwrap();
//! assert_eq!(end.to_string(), "2024-02-29T01:30:00.000");
//!
//! assert_eq!(end.difference(&start), Duration::from_hours(2).unwrap());
//! assert_eq!(start.difference(&end), Duration::from_hours(-2).unwrap());
//! ```

use std::fmt;
use std::str::FromStr;

use super::date::Date;
use super::duration::{Duration, MS_PER_DAY};
use super::error::{DateError, ParseError, ValueError};
use super::time::Time;
use crate::traits::{Chronological, ValueObject};

/// A calendar date with a time of day.
///
/// Field order makes the derived ordering compare the date first, then the
/// time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Composes a date and a time. Both are already valid, so this cannot fail.
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Creates a DateTime from all seven components.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::DateTime;
    ///
    /// let dt = DateTime::from_parts(2024, 6, 15, 9, 30, 0, 0).unwrap();
    /// assert_eq!(dt.to_string(), "2024-06-15T09:30:00.000");
    ///
    /// assert!(DateTime::from_parts(2023, 2, 29, 9, 30, 0, 0).is_err());
    /// assert!(DateTime::from_parts(2024, 2, 29, 24, 0, 0, 0).is_err());
    /// ```
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, ValueError> {
        let date = Date::from_ymd(year, month, day)?;
        let time = Time::from_hms_milli(hour, minute, second, millisecond)?;
        Ok(Self::new(date, time))
    }

    /// Parses the canonical form `YYYY-MM-DDTHH:MM:SS.mmm`.
    ///
    /// The time part follows [`Time::parse`], so `YYYY-MM-DDTHH:MM:SS` is
    /// accepted as well.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: String| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let (date, time) = s
            .split_once('T')
            .ok_or_else(|| fail("missing 'T' separator".to_string()))?;
        let date = Date::parse(date).map_err(|e| fail(e.reason))?;
        let time = Time::parse(time).map_err(|e| fail(e.reason))?;
        Ok(Self::new(date, time))
    }

    /// Returns the date component.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the time component.
    pub fn time(&self) -> Time {
        self.time
    }

    /// Returns the signed duration from `other` to `self`.
    ///
    /// Positive when `self` is after `other`.
    pub fn difference(&self, other: &DateTime) -> Duration {
        // The calendar spans under 2^28 days, so this stays far below i64::MAX.
        let days = self.date - other.date;
        let within_day = self.time.duration_since(&other.time).num_milliseconds();
        Duration::new_unchecked(days * MS_PER_DAY + within_day)
    }

    /// Shifts by a duration, forward if positive and backward if negative.
    ///
    /// # Returns
    /// `Err(DateError::OutOfRange)` if the date would leave the supported
    /// calendar range.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::{DateTime, Duration};
    ///
    /// let new_year = DateTime::from_parts(2025, 1, 1, 0, 15, 0, 0).unwrap();
    /// let back = new_year.checked_add(Duration::from_minutes(-30).unwrap()).unwrap();
    /// assert_eq!(back.to_string(), "2024-12-31T23:45:00.000");
    /// ```
    pub fn checked_add(self, duration: Duration) -> Result<Self, DateError> {
        let (time, days) = self.time.overflowing_add(duration);
        let date = self.date.add_days(days)?;
        Ok(Self::new(date, time))
    }

    /// Shifts backward by a duration; `checked_add` with the negated duration.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, DateError> {
        self.checked_add(-duration)
    }
}

impl From<Date> for DateTime {
    /// Midnight at the start of `date`.
    fn from(date: Date) -> Self {
        Self::new(date, Time::MIDNIGHT)
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        DateTime::parse(s)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl ValueObject for DateTime {
    const CANONICAL_PATTERN: &'static str = "YYYY-MM-DDTHH:MM:SS.mmm";
}

impl Chronological for DateTime {}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_composition() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let time = Time::from_hms_milli(9, 30, 15, 250).unwrap();
        let value = DateTime::new(date, time);

        assert_eq!(value.date(), date);
        assert_eq!(value.time(), time);
        assert_eq!(value, DateTime::from_parts(2024, 6, 15, 9, 30, 15, 250).unwrap());
        assert_eq!(DateTime::from(date).time(), Time::MIDNIGHT);
    }

    #[test]
    fn test_from_parts_errors() {
        assert!(matches!(
            DateTime::from_parts(2023, 2, 29, 0, 0, 0, 0),
            Err(ValueError::Date(DateError::InvalidDate { .. }))
        ));
        assert!(matches!(
            DateTime::from_parts(2024, 2, 29, 0, 0, 0, 1000),
            Err(ValueError::Time(_))
        ));
    }

    #[test]
    fn test_ordering_date_first() {
        let earlier_day_late_time = dt("2024-01-01T23:59:59.999");
        let later_day_early_time = dt("2024-01-02T00:00:00.000");
        assert!(earlier_day_late_time < later_day_early_time);
        assert!(dt("2024-01-01T10:00:00.000") < dt("2024-01-01T10:00:00.001"));
        assert!(later_day_early_time.is_after(&earlier_day_late_time));
    }

    #[test]
    fn test_rollover_forward() {
        let result = dt("2024-06-15T23:30:00.000")
            .checked_add(Duration::from_hours(2).unwrap())
            .unwrap();
        assert_eq!(result, dt("2024-06-16T01:30:00.000"));
    }

    #[test]
    fn test_rollover_across_year_and_leap_day() {
        let start = dt("2023-12-31T22:00:00.000");
        let result = start.checked_add(Duration::from_parts(60, 3, 0, 0, 0).unwrap()).unwrap();
        assert_eq!(result, dt("2024-03-01T01:00:00.000"));

        let result = dt("2024-03-01T00:30:00.000")
            .checked_sub(Duration::from_hours(1).unwrap())
            .unwrap();
        assert_eq!(result, dt("2024-02-29T23:30:00.000"));

        let result = dt("2023-03-01T00:30:00.000")
            .checked_sub(Duration::from_hours(1).unwrap())
            .unwrap();
        assert_eq!(result, dt("2023-02-28T23:30:00.000"));
    }

    #[test]
    fn test_multi_day_negative() {
        let result = dt("2024-01-03T06:00:00.000")
            .checked_add(Duration::from_parts(-2, -7, 0, 0, 0).unwrap())
            .unwrap();
        assert_eq!(result, dt("2023-12-31T23:00:00.000"));
    }

    #[test]
    fn test_add_zero() {
        let value = dt("2024-06-15T12:00:00.000");
        assert_eq!(value.checked_add(Duration::ZERO).unwrap(), value);
    }

    #[test]
    fn test_add_out_of_range() {
        let value = dt("2024-06-15T12:00:00.000");
        assert!(matches!(
            value.checked_add(Duration::MAX),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            value.checked_add(Duration::MIN),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_difference_sign() {
        let a = dt("2024-03-01T01:00:00.000");
        let b = dt("2024-02-28T23:00:00.000");
        let expected = Duration::from_hours(26).unwrap();

        assert_eq!(a.difference(&b), expected);
        assert_eq!(b.difference(&a), -expected);
        assert_eq!(a.difference(&a), Duration::ZERO);
        assert_eq!(b.checked_add(a.difference(&b)).unwrap(), a);
    }

    #[test]
    fn test_difference_across_full_range() {
        let first = DateTime::from(Date::from_ymd(-200_000, 1, 1).unwrap());
        let last = DateTime::from_parts(200_000, 12, 31, 23, 59, 59, 999).unwrap();
        let span = last.difference(&first);
        assert!(span.is_positive());
        assert_eq!(first.checked_add(span).unwrap(), last);
    }

    #[test]
    fn test_display_and_parse() {
        let value = DateTime::from_parts(2024, 6, 5, 7, 8, 9, 10).unwrap();
        assert_eq!(value.to_string(), "2024-06-05T07:08:09.010");
        assert_eq!(dt("2024-06-05T07:08:09"), DateTime::from_parts(2024, 6, 5, 7, 8, 9, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        for input in [
            "",
            "2024-06-05",
            "2024-06-05 07:08:09.010",
            "2024-06-05t07:08:09.010",
            "2024-06-05T",
            "T07:08:09.010",
            "2024-02-30T07:08:09.010",
            "2024-06-05T24:00:00.000",
            "2024-06-05T07:08:09.010Z",
            "2024-06-05T07:08:09.010+01:00",
        ] {
            let err = DateTime::parse(input).unwrap_err();
            assert_eq!(err.input, input);
            assert_eq!(err.expected, "YYYY-MM-DDTHH:MM:SS.mmm");
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_datetime_serde_roundtrip() {
            let value = dt("2024-06-05T07:08:09.010");
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, "\"2024-06-05T07:08:09.010\"");
            assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), value);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn datetime_strategy() -> impl Strategy<Value = DateTime> {
            (-10_000_000i64..10_000_000i64, 0u32..(MS_PER_DAY as u32)).prop_map(|(days, millis)| {
                let epoch = Date::from_ymd(2000, 1, 1).unwrap();
                DateTime::new(
                    epoch.add_days(days).unwrap(),
                    Time::from_millis_of_day(millis).unwrap(),
                )
            })
        }

        fn duration_strategy() -> impl Strategy<Value = Duration> {
            prop_oneof![
                (-MS_PER_DAY..MS_PER_DAY),
                (-400 * 366 * MS_PER_DAY..400 * 366 * MS_PER_DAY),
            ]
            .prop_map(|millis| Duration::from_millis(millis).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_add_then_subtract_is_identity(
                value in datetime_strategy(),
                d in duration_strategy(),
            ) {
                let shifted = value.checked_add(d).unwrap();
                prop_assert_eq!(shifted.checked_sub(d).unwrap(), value);
            }

            #[test]
            fn test_difference_recovers_duration(
                value in datetime_strategy(),
                d in duration_strategy(),
            ) {
                let shifted = value.checked_add(d).unwrap();
                prop_assert_eq!(shifted.difference(&value), d);
            }

            #[test]
            fn test_add_is_monotonic(value in datetime_strategy(), d in duration_strategy()) {
                let shifted = value.checked_add(d).unwrap();
                prop_assert_eq!(shifted.cmp(&value), d.cmp(&Duration::ZERO));
            }

            #[test]
            fn test_canonical_roundtrip(value in datetime_strategy()) {
                prop_assert_eq!(DateTime::parse(&value.to_string()).unwrap(), value);
            }
        }
    }
}
