//! Temporal and monetary value types.
//!
//! This module provides:
//! - `date`: Calendar date (proleptic Gregorian) with day arithmetic
//! - `time`: Time of day with millisecond precision
//! - `datetime`: Composition of `Date` and `Time` with duration arithmetic
//! - `duration`: Signed span of time held as total milliseconds
//! - `currency`: ISO 4217 currency codes with minor-unit metadata
//! - `money`: Amount in minor units paired with a currency
//! - `geo`: Latitude, longitude, altitude and their combination
//! - `region`: Continents, countries and postal addresses
//! - `email`: Validated e-mail addresses
//! - `error`: Structured error types for every value type
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`Weekday`], [`is_leap_year`], [`days_in_month`] from `date`
//! - [`Time`] from `time`, [`DateTime`] from `datetime`, [`Duration`] from `duration`
//! - [`Currency`] from `currency`, [`Money`] from `money`
//! - [`Latitude`], [`Longitude`], [`Altitude`], [`GeoLocation`] from `geo`
//! - [`Continent`], [`CountryCode`], [`Country`], [`Address`] from `region`
//! - [`Email`] from `email`
//! - All error types from `error`

pub mod currency;
pub mod date;
pub mod datetime;
pub mod duration;
pub mod email;
pub mod error;
pub mod geo;
pub mod money;
pub mod region;
pub mod time;

mod scan;
mod wide;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use date::{days_in_month, is_leap_year, Date, Weekday};
pub use datetime::DateTime;
pub use duration::Duration;
pub use email::Email;
pub use error::{
    AddressError, CurrencyError, DateError, DurationError, EmailError, GeoError, MoneyError,
    ParseError, TimeError, ValueError,
};
pub use geo::{Altitude, GeoLocation, Latitude, Longitude};
pub use money::Money;
pub use region::{Address, Continent, Country, CountryCode};
pub use time::Time;
