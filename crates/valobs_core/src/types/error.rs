//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and day arithmetic
//! - `TimeError`: Errors from time-of-day construction and arithmetic
//! - `DurationError`: Errors from duration construction and arithmetic
//! - `CurrencyError`: Errors from currency parsing
//! - `MoneyError`: Errors from money construction and arithmetic
//! - `GeoError`: Errors from coordinate construction
//! - `AddressError`: Errors from country and postal address construction
//! - `EmailError`: Errors from e-mail address validation
//! - `ParseError`: Errors from parsing canonical strings
//! - `ValueError`: Union of all of the above for callers mixing value types
//!
//! Every error is raised at the point of construction or at the operation
//! that detects the violation. None of them are transient.

use thiserror::Error;

use super::currency::Currency;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Month outside 1-12, or day outside the month's range
/// - `OutOfRange`: Result lies outside the supported calendar range
///
/// # Examples
/// ```
/// use valobs_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2023, month: 2, day: 29 };
/// assert_eq!(format!("{}", err), "Invalid date: 2023-2-29");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
        /// Day component
        day: u32,
    },

    /// The date falls outside the supported calendar range.
    #[error("Date out of supported range: {0}")]
    OutOfRange(String),
}

/// Time-of-day errors.
///
/// # Examples
/// ```
/// use valobs_core::types::TimeError;
///
/// let err = TimeError::InvalidTime { hour: 24, minute: 0, second: 0, millisecond: 0 };
/// assert_eq!(format!("{}", err), "Invalid time: 24:0:0.0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// A field is outside its bound.
    #[error("Invalid time: {hour}:{minute}:{second}.{millisecond}")]
    InvalidTime {
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
        /// Second component (0-59)
        second: u32,
        /// Millisecond component (0-999)
        millisecond: u32,
    },

    /// Adding a duration to a time of day would leave the day.
    #[error("Adding {offset_ms}ms to {time} crosses a day boundary by {days} day(s)")]
    DayBoundaryCrossed {
        /// Canonical form of the starting time
        time: String,
        /// The offset that was added, in milliseconds
        offset_ms: i64,
        /// Signed number of days the result would have moved
        days: i64,
    },
}

/// Duration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The normalised millisecond total does not fit the representable range.
    #[error("Duration overflow: {0}")]
    Overflow(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use valobs_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Money-related errors.
///
/// # Variants
/// - `InvalidAmount`: More fractional digits than the currency allows, or the
///   amount does not fit in minor units
/// - `InvalidCurrency`: Unrecognised currency code
/// - `CurrencyMismatch`: Arithmetic or comparison across currencies
/// - `Overflow`: Arithmetic result does not fit in minor units
/// - `DivisionByZero`: Scalar division by zero
///
/// # Examples
/// ```
/// use valobs_core::types::{Currency, MoneyError};
///
/// let err = MoneyError::CurrencyMismatch { left: Currency::USD, right: Currency::EUR };
/// assert_eq!(format!("{}", err), "Currency mismatch: USD vs EUR");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Amount is not representable in the currency.
    #[error("Invalid amount {amount} for {currency}: {reason}")]
    InvalidAmount {
        /// The offending amount as given
        amount: String,
        /// The currency the amount was checked against
        currency: Currency,
        /// Why it was rejected
        reason: String,
    },

    /// Unrecognised currency code.
    #[error(transparent)]
    InvalidCurrency(#[from] CurrencyError),

    /// Operands have different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand
        left: Currency,
        /// Currency of the right operand
        right: Currency,
    },

    /// Result does not fit in minor units.
    #[error("Money overflow in {0}")]
    Overflow(Currency),

    /// Division by a zero scalar.
    #[error("Division of money by zero")]
    DivisionByZero,
}

/// Coordinate errors.
///
/// # Examples
/// ```
/// use valobs_core::types::GeoError;
///
/// let err = GeoError::OutOfRange { component: "latitude", value: 91.0, min: -90.0, max: 90.0 };
/// assert_eq!(format!("{}", err), "latitude 91 outside [-90, 90]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// The coordinate lies outside its bound.
    #[error("{component} {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Which coordinate was checked
        component: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// NaN or infinite input.
    #[error("{component} must be finite")]
    NotFinite {
        /// Which coordinate was checked
        component: &'static str,
    },
}

/// Country and postal address errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Country code is not two upper-case ASCII letters.
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),

    /// A required field is blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A field holds characters it may not contain.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Name of the field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// E-mail address errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Not of the form `local@domain.tld`.
    #[error("Invalid email address: {0:?}")]
    InvalidFormat(String),

    /// Longer than the 254 characters a mail path allows.
    #[error("Email address longer than {max} characters: {length}")]
    TooLong {
        /// Length of the rejected address
        length: usize,
        /// Maximum accepted length
        max: usize,
    },
}

/// Failure to parse a canonical string.
///
/// Carries the offending input and the pattern that was expected. Parsing
/// never returns a partial value.
///
/// # Examples
/// ```
/// use valobs_core::types::Date;
///
/// let err = Date::parse("2024/06/15").unwrap_err();
/// assert_eq!(err.input, "2024/06/15");
/// assert_eq!(err.expected, "YYYY-MM-DD");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse {input:?}: expected {expected} ({reason})")]
pub struct ParseError {
    /// The string that failed to parse
    pub input: String,
    /// The canonical pattern the input should follow
    pub expected: &'static str,
    /// Why the input was rejected
    pub reason: String,
}

impl ParseError {
    /// Creates a parse error for `input` against the `expected` pattern.
    pub fn new(input: &str, expected: &'static str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            expected,
            reason: reason.into(),
        }
    }
}

/// Any error raised by a value type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Date construction or arithmetic failed
    #[error(transparent)]
    Date(#[from] DateError),

    /// Time construction or arithmetic failed
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Duration construction or arithmetic failed
    #[error(transparent)]
    Duration(#[from] DurationError),

    /// Currency lookup failed
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Money construction or arithmetic failed
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Coordinate construction failed
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Country or address construction failed
    #[error(transparent)]
    Address(#[from] AddressError),

    /// E-mail validation failed
    #[error(transparent)]
    Email(#[from] EmailError),

    /// Canonical string parsing failed
    #[error(transparent)]
    Parse(#[from] ParseError),
}
