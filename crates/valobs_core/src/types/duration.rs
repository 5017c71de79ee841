//! Signed span of time held as a single millisecond count.
//!
//! Only fixed-length units are representable (days, hours, minutes, seconds,
//! milliseconds); calendar units such as months are deliberately absent
//! because their length depends on the starting date.
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::duration::Duration;
//!
//! let d = Duration::from_parts(1, 2, 3, 4, 5).unwrap();
//! assert_eq!(d.num_milliseconds(), 93_784_005);
//! assert_eq!(d.to_string(), "93784005");
//! assert_eq!(d.to_unit_string(), "1d2h3m4s5ms");
//! assert_eq!(d.num_hours(), 26);
//! ```

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use super::error::{DurationError, ParseError};
use super::scan::{canonical_integer, no_leading_zero};
use crate::traits::ValueObject;

/// Milliseconds in one second.
pub const MS_PER_SECOND: i64 = 1000;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const UNITS: [(&str, i64); 5] = [
    ("d", MS_PER_DAY),
    ("h", MS_PER_HOUR),
    ("m", MS_PER_MINUTE),
    ("s", MS_PER_SECOND),
    ("ms", 1),
];

/// Signed duration with millisecond resolution.
///
/// The range is symmetric, `[-i64::MAX, i64::MAX]` milliseconds, so negation
/// never overflows. Ordering compares signed magnitudes.
///
/// Unit conversions (`num_days`, `num_hours`, ...) truncate toward zero:
/// `-90` minutes is `-1` hour, never `-2`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// The empty duration, identity for addition.
    pub const ZERO: Duration = Duration { millis: 0 };

    /// The longest positive duration.
    pub const MAX: Duration = Duration { millis: i64::MAX };

    /// The longest negative duration.
    pub const MIN: Duration = Duration { millis: -i64::MAX };

    /// Wraps a millisecond count the caller has already bounded.
    pub(crate) const fn new_unchecked(millis: i64) -> Self {
        Duration { millis }
    }

    /// Creates a duration from milliseconds.
    ///
    /// # Returns
    /// `Err(DurationError::Overflow)` only for `i64::MIN`, which has no
    /// positive counterpart.
    pub fn from_millis(millis: i64) -> Result<Self, DurationError> {
        if millis == i64::MIN {
            return Err(DurationError::Overflow(format!("{}ms", millis)));
        }
        Ok(Duration { millis })
    }

    /// Creates a duration from seconds.
    pub fn from_seconds(seconds: i64) -> Result<Self, DurationError> {
        Self::from_parts(0, 0, 0, seconds, 0)
    }

    /// Creates a duration from minutes.
    pub fn from_minutes(minutes: i64) -> Result<Self, DurationError> {
        Self::from_parts(0, 0, minutes, 0, 0)
    }

    /// Creates a duration from hours.
    pub fn from_hours(hours: i64) -> Result<Self, DurationError> {
        Self::from_parts(0, hours, 0, 0, 0)
    }

    /// Creates a duration from days of exactly 24 hours.
    pub fn from_days(days: i64) -> Result<Self, DurationError> {
        Self::from_parts(days, 0, 0, 0, 0)
    }

    /// Normalises any combination of unit components to milliseconds.
    ///
    /// Components may have mixed signs; only the total must be representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::Duration;
    ///
    /// let d = Duration::from_parts(0, 1, -30, 0, 0).unwrap();
    /// assert_eq!(d, Duration::from_minutes(30).unwrap());
    ///
    /// assert!(Duration::from_parts(i64::MAX, 0, 0, 0, 0).is_err());
    /// ```
    pub fn from_parts(
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        millis: i64,
    ) -> Result<Self, DurationError> {
        let overflow = || {
            DurationError::Overflow(format!(
                "{}d {}h {}m {}s {}ms",
                days, hours, minutes, seconds, millis
            ))
        };

        [
            (days, MS_PER_DAY),
            (hours, MS_PER_HOUR),
            (minutes, MS_PER_MINUTE),
            (seconds, MS_PER_SECOND),
            (millis, 1),
        ]
        .into_iter()
        .try_fold(0_i64, |total, (count, unit)| {
            count.checked_mul(unit).and_then(|part| total.checked_add(part))
        })
        .ok_or_else(overflow)
        .and_then(|total| Self::from_millis(total).map_err(|_| overflow()))
    }

    /// Parses either the canonical millisecond form (`-90061001`) or the
    /// unit form (`-1d1h1m1s1ms`).
    ///
    /// Each value has one spelling per form: no `+`, no leading zeros and no
    /// negative zero. In the unit form, units appear at most once, from
    /// largest to smallest; a single leading `-` negates the whole duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::Duration;
    ///
    /// assert_eq!(Duration::parse("5400000").unwrap(), Duration::from_minutes(90).unwrap());
    /// assert_eq!(Duration::parse("1h30m").unwrap(), Duration::from_minutes(90).unwrap());
    /// assert_eq!(Duration::parse("-2d").unwrap(), Duration::from_days(-2).unwrap());
    /// assert!(Duration::parse("30m1h").is_err());
    /// assert!(Duration::parse("1.5h").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: &str| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        if let Some((negative, digits)) = canonical_integer(s) {
            let magnitude: i64 = digits
                .parse()
                .map_err(|_| fail("millisecond count out of range"))?;
            let millis = if negative { -magnitude } else { magnitude };
            return Ok(Duration { millis });
        }

        let (negative, mut rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if rest.is_empty() {
            return Err(fail("empty duration"));
        }

        let mut total: i64 = 0;
        let mut next_unit = 0;
        while !rest.is_empty() {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| fail("number without unit"))?;
            if digits_end == 0 {
                return Err(fail("unit without number"));
            }
            if !no_leading_zero(&rest[..digits_end]) {
                return Err(fail("leading zeros are not canonical"));
            }
            let count: i64 = rest[..digits_end]
                .parse()
                .map_err(|_| fail("component out of range"))?;
            rest = &rest[digits_end..];

            let unit_len = rest
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(rest.len());
            let unit = &rest[..unit_len];
            rest = &rest[unit_len..];

            let position = UNITS[next_unit..]
                .iter()
                .position(|(name, _)| *name == unit)
                .ok_or_else(|| fail("units must be d, h, m, s, ms in descending order"))?;
            let (_, scale) = UNITS[next_unit + position];
            next_unit += position + 1;

            total = count
                .checked_mul(scale)
                .and_then(|part| total.checked_add(part))
                .ok_or_else(|| fail("duration out of range"))?;
        }

        if negative && total == 0 {
            return Err(fail("negative zero is not canonical"));
        }
        let millis = if negative { -total } else { total };
        Ok(Duration { millis })
    }

    /// Returns the total number of whole days, truncated toward zero.
    pub fn num_days(&self) -> i64 {
        self.millis / MS_PER_DAY
    }

    /// Returns the total number of whole hours, truncated toward zero.
    pub fn num_hours(&self) -> i64 {
        self.millis / MS_PER_HOUR
    }

    /// Returns the total number of whole minutes, truncated toward zero.
    pub fn num_minutes(&self) -> i64 {
        self.millis / MS_PER_MINUTE
    }

    /// Returns the total number of whole seconds, truncated toward zero.
    pub fn num_seconds(&self) -> i64 {
        self.millis / MS_PER_SECOND
    }

    /// Returns the total number of milliseconds.
    pub fn num_milliseconds(&self) -> i64 {
        self.millis
    }

    /// `true` for the zero duration.
    pub fn is_zero(&self) -> bool {
        self.millis == 0
    }

    /// `true` if the duration points backward in time.
    pub fn is_negative(&self) -> bool {
        self.millis < 0
    }

    /// `true` if the duration points forward in time.
    pub fn is_positive(&self) -> bool {
        self.millis > 0
    }

    /// Returns the magnitude of the duration.
    pub fn abs(&self) -> Self {
        Duration {
            millis: self.millis.abs(),
        }
    }

    /// Adds two durations.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::Duration;
    ///
    /// let d = Duration::from_hours(1).unwrap();
    /// assert_eq!(d.checked_add(Duration::ZERO).unwrap(), d);
    /// assert!(Duration::MAX.checked_add(d).is_err());
    /// ```
    pub fn checked_add(self, other: Duration) -> Result<Self, DurationError> {
        self.millis
            .checked_add(other.millis)
            .ok_or_else(|| DurationError::Overflow(format!("{}ms + {}ms", self, other)))
            .and_then(Self::from_millis)
    }

    /// Subtracts `other` from `self`.
    pub fn checked_sub(self, other: Duration) -> Result<Self, DurationError> {
        self.checked_add(-other)
    }

    /// Multiplies the duration by a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::Duration;
    ///
    /// let shift = Duration::from_hours(8).unwrap();
    /// assert_eq!(shift.checked_mul(-3).unwrap(), Duration::from_days(-1).unwrap());
    /// ```
    pub fn checked_mul(self, factor: i64) -> Result<Self, DurationError> {
        self.millis
            .checked_mul(factor)
            .ok_or_else(|| DurationError::Overflow(format!("{}ms * {}", self, factor)))
            .and_then(Self::from_millis)
    }

    /// Renders the readable unit form, e.g. `-1d2h3m4s5ms`.
    ///
    /// Zero components are omitted; the zero duration renders as `0ms`.
    pub fn to_unit_string(&self) -> String {
        if self.millis == 0 {
            return "0ms".to_string();
        }

        let mut remaining = self.millis.unsigned_abs();
        let mut out = String::new();
        if self.millis < 0 {
            out.push('-');
        }
        for (name, scale) in UNITS {
            let scale = scale as u64;
            let count = remaining / scale;
            remaining %= scale;
            if count > 0 {
                out.push_str(&count.to_string());
                out.push_str(name);
            }
        }
        out
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration {
            millis: -self.millis,
        }
    }
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Duration::parse(s)
    }
}

impl fmt::Display for Duration {
    /// Formats as the signed total millisecond count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.millis)
    }
}

impl ValueObject for Duration {
    const CANONICAL_PATTERN: &'static str = "signed milliseconds, or units like 1d2h3m4s5ms";
}
