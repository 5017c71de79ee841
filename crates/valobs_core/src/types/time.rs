//! Time of day with millisecond precision.
//!
//! `Time` never represents a leap second or `24:00:00`. Adding a duration
//! either stays within the same day (`checked_add`) or reports the day carry
//! explicitly (`overflowing_add`); it never wraps silently.

use std::fmt;
use std::str::FromStr;

use super::duration::{Duration, MS_PER_DAY};
use super::error::{ParseError, TimeError};
use super::scan::fixed_digits;
use crate::traits::{Chronological, ValueObject};

/// Time of day, `00:00:00.000` to `23:59:59.999`.
///
/// Held as milliseconds since midnight, so ordering is chronological.
///
/// # Examples
///
/// ```
/// use valobs_core::types::time::Time;
///
/// let time = Time::from_hms_milli(23, 59, 59, 999).unwrap();
/// assert_eq!(time.to_string(), "23:59:59.999");
///
/// assert!(Time::from_hms(24, 0, 0).is_err());
/// assert!(Time::from_hms(12, 0, 60).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    millis_of_day: u32,
}

impl Time {
    /// The first instant of the day, `00:00:00.000`.
    pub const MIDNIGHT: Time = Time { millis_of_day: 0 };

    /// Creates a Time from hour, minute, second and millisecond.
    ///
    /// # Returns
    /// `Err(TimeError::InvalidTime)` if any field is out of its bound
    /// (hour 0-23, minute 0-59, second 0-59, millisecond 0-999).
    pub fn from_hms_milli(
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            });
        }
        Ok(Time {
            millis_of_day: ((hour * 60 + minute) * 60 + second) * 1000 + millisecond,
        })
    }

    /// Creates a Time with the millisecond defaulted to 0.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        Self::from_hms_milli(hour, minute, second, 0)
    }

    /// Creates a Time with the second and millisecond defaulted to 0.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        Self::from_hms_milli(hour, minute, 0, 0)
    }

    /// Creates a Time from milliseconds elapsed since midnight.
    ///
    /// # Returns
    /// `Err(TimeError::InvalidTime)` if `millis` is not below one day.
    pub fn from_millis_of_day(millis: u32) -> Result<Self, TimeError> {
        let total_seconds = millis / 1000;
        Self::from_hms_milli(
            total_seconds / 3600,
            total_seconds / 60 % 60,
            total_seconds % 60,
            millis % 1000,
        )
    }

    /// Parses a time from its canonical form (`HH:MM:SS.mmm`).
    ///
    /// `HH:MM:SS` is also accepted and means a millisecond of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::time::Time;
    ///
    /// assert_eq!(Time::parse("08:30:00.250").unwrap(), Time::from_hms_milli(8, 30, 0, 250).unwrap());
    /// assert_eq!(Time::parse("08:30:00").unwrap(), Time::from_hms(8, 30, 0).unwrap());
    /// assert!(Time::parse("8:30:00").is_err());
    /// assert!(Time::parse("08:30:00.25").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: &str| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let (clock, millis) = match s.split_once('.') {
            Some((clock, millis)) => (
                clock,
                fixed_digits(millis, 3).ok_or_else(|| fail("milliseconds must be three digits"))?,
            ),
            None => (s, 0),
        };

        let fields: Vec<&str> = clock.split(':').collect();
        let [hour, minute, second] = fields.as_slice() else {
            return Err(fail("expected three ':' separated fields"));
        };
        let hour = fixed_digits(hour, 2).ok_or_else(|| fail("hour must be two digits"))?;
        let minute = fixed_digits(minute, 2).ok_or_else(|| fail("minute must be two digits"))?;
        let second = fixed_digits(second, 2).ok_or_else(|| fail("second must be two digits"))?;

        Time::from_hms_milli(hour, minute, second, millis).map_err(|e| fail(&e.to_string()))
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.millis_of_day / 3_600_000
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.millis_of_day / 60_000 % 60
    }

    /// Returns the second component (0-59).
    pub fn second(&self) -> u32 {
        self.millis_of_day / 1000 % 60
    }

    /// Returns the millisecond component (0-999).
    pub fn millisecond(&self) -> u32 {
        self.millis_of_day % 1000
    }

    /// Returns milliseconds elapsed since midnight.
    pub fn millis_of_day(&self) -> u32 {
        self.millis_of_day
    }

    /// Adds a duration, failing if the result is not on the same day.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::{Duration, Time};
    ///
    /// let noon = Time::from_hm(12, 0).unwrap();
    /// let later = noon.checked_add(Duration::from_minutes(90).unwrap()).unwrap();
    /// assert_eq!(later, Time::from_hm(13, 30).unwrap());
    ///
    /// let late = Time::from_hm(23, 30).unwrap();
    /// assert!(late.checked_add(Duration::from_hours(1).unwrap()).is_err());
    /// ```
    pub fn checked_add(self, duration: Duration) -> Result<Self, TimeError> {
        match self.overflowing_add(duration) {
            (time, 0) => Ok(time),
            (_, days) => Err(TimeError::DayBoundaryCrossed {
                time: self.to_string(),
                offset_ms: duration.num_milliseconds(),
                days,
            }),
        }
    }

    /// Subtracts a duration, failing if the result is not on the same day.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, TimeError> {
        self.checked_add(-duration)
    }

    /// Adds a duration, wrapping around midnight.
    ///
    /// Returns the wrapped time and the signed number of days crossed, so
    /// the caller decides what the carry means.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::{Duration, Time};
    ///
    /// let late = Time::from_hm(23, 30).unwrap();
    /// let (time, days) = late.overflowing_add(Duration::from_hours(2).unwrap());
    /// assert_eq!(time, Time::from_hm(1, 30).unwrap());
    /// assert_eq!(days, 1);
    ///
    /// let (time, days) = Time::MIDNIGHT.overflowing_add(Duration::from_millis(-1).unwrap());
    /// assert_eq!(time.to_string(), "23:59:59.999");
    /// assert_eq!(days, -1);
    /// ```
    pub fn overflowing_add(self, duration: Duration) -> (Self, i64) {
        let offset = duration.num_milliseconds();
        let whole_days = offset.div_euclid(MS_PER_DAY);
        let total = i64::from(self.millis_of_day()) + offset.rem_euclid(MS_PER_DAY);

        // total < 2 days, so the remainder always fits a time of day
        let time = Time {
            millis_of_day: (total % MS_PER_DAY) as u32,
        };
        (time, whole_days + total / MS_PER_DAY)
    }

    /// Returns the signed duration from `earlier` to `self` within one day.
    pub fn duration_since(&self, earlier: &Time) -> Duration {
        Duration::new_unchecked(i64::from(self.millis_of_day) - i64::from(earlier.millis_of_day))
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Time::parse(s)
    }
}

impl fmt::Display for Time {
    /// Formats as `HH:MM:SS.mmm`; milliseconds are always rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

impl ValueObject for Time {
    const CANONICAL_PATTERN: &'static str = "HH:MM:SS.mmm";
}

impl Chronological for Time {}
