//! Calendar date on the proleptic Gregorian calendar.
//!
//! This module provides:
//! - `Date`: Type-safe, validated date wrapper around chrono::NaiveDate
//! - `is_leap_year` / `days_in_month`: The validation rules, exposed for callers
//! - Day arithmetic that rolls over month and year boundaries
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::date::{Date, Weekday};
//!
//! let date = Date::from_ymd(2024, 2, 28).unwrap();
//! assert_eq!(date.add_days(1).unwrap().to_string(), "2024-02-29");
//! assert_eq!(date.add_days(2).unwrap().to_string(), "2024-03-01");
//! assert_eq!(date.weekday(), Weekday::Wed);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::{DateError, ParseError};
use super::scan::{fixed_digits, no_leading_zero, signed_digits};
use crate::traits::{Chronological, ValueObject};

pub use chrono::Weekday;

/// Returns `true` if `year` is a leap year.
///
/// Divisible by 4, except centuries, which must be divisible by 400.
///
/// # Examples
///
/// ```
/// use valobs_core::types::date::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in 1-12.
///
/// # Examples
///
/// ```
/// use valobs_core::types::date::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2023, 2), Some(28));
/// assert_eq!(days_in_month(2023, 4), Some(30));
/// assert_eq!(days_in_month(2023, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Type-safe calendar date.
///
/// Two dates with the same year, month and day are the same value. Ordering
/// is chronological.
///
/// # Examples
///
/// ```
/// use valobs_core::types::date::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from canonical string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// - `Err(DateError::InvalidDate)` if `month` is not in 1-12 or `day`
    ///   is not in 1..=`days_in_month(year, month)`
    /// - `Err(DateError::OutOfRange)` if `year` is beyond the supported range
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::date::Date;
    ///
    /// // Leap year February 29th
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    ///
    /// // Not a leap year
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDate { year, month, day };
        let last_day = days_in_month(year, month).ok_or_else(|| invalid.clone())?;
        if day == 0 || day > last_day {
            return Err(invalid);
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("year {}", year)))
    }

    /// Parses a date from its canonical form (`YYYY-MM-DD`).
    ///
    /// Years outside 0000-9999 use the expanded form with an explicit sign,
    /// e.g. `+12345-01-01` or `-0044-03-15`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::date::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// assert!(Date::parse("2024-6-15").is_err());
    /// assert!(Date::parse("2023-02-29").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: &str| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let mut parts = s.rsplitn(3, '-');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(month), Some(year)) => (day, month, year),
            _ => return Err(fail("expected three '-' separated fields")),
        };

        let day = fixed_digits(day, 2).ok_or_else(|| fail("day must be two digits"))?;
        let month = fixed_digits(month, 2).ok_or_else(|| fail("month must be two digits"))?;
        let year = parse_year(year).ok_or_else(|| fail("malformed year"))?;

        Date::from_ymd(year, month, day).map_err(|e| fail(&e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the year (1-366).
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::date::{Date, Weekday};
    ///
    /// assert_eq!(Date::from_ymd(2000, 1, 1).unwrap().weekday(), Weekday::Sat);
    /// assert_eq!(Date::from_ymd(2024, 6, 15).unwrap().weekday(), Weekday::Sat);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date `days` days later (earlier if negative).
    ///
    /// # Returns
    /// `Err(DateError::OutOfRange)` if the result leaves the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::date::Date;
    ///
    /// let new_year = Date::from_ymd(2024, 12, 31).unwrap().add_days(1).unwrap();
    /// assert_eq!(new_year, Date::from_ymd(2025, 1, 1).unwrap());
    ///
    /// let back = new_year.add_days(-366).unwrap();
    /// assert_eq!(back, Date::from_ymd(2024, 1, 1).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };

        shifted
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} {:+} days", self, days)))
    }

    /// Returns the date `days` days earlier (later if negative).
    pub fn sub_days(self, days: i64) -> Result<Self, DateError> {
        let negated = days
            .checked_neg()
            .ok_or_else(|| DateError::OutOfRange(format!("{} - {} days", self, days)))?;
        self.add_days(negated)
    }
}

fn parse_year(field: &str) -> Option<i32> {
    let (negative, digits) = signed_digits(field)?;
    let explicit_sign = field.starts_with(['-', '+']);
    if digits.len() < 4 || (!explicit_sign && digits.len() != 4) {
        return None;
    }
    // Expanded years are zero-padded to four digits and no wider.
    if digits.len() > 4 && !no_leading_zero(digits) {
        return None;
    }

    let magnitude: i32 = digits.parse().ok()?;
    let year = if negative { -magnitude } else { magnitude };

    // Years 0000-9999 have exactly one form: four digits, no sign.
    if explicit_sign && (0..=9999).contains(&year) {
        return None;
    }
    Some(year)
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as `YYYY-MM-DD`, with a sign outside 0000-9999.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month(), self.day())
        } else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month(), self.day())
        }
    }
}

impl ValueObject for Date {
    const CANONICAL_PATTERN: &'static str = "YYYY-MM-DD";
}

impl Chronological for Date {}
