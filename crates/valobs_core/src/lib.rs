//! # valobs_core: Immutable Value Types for Domain Modelling
//!
//! ## Foundation Role
//!
//! valobs_core is the bottom layer of the workspace, providing:
//! - The value-object contract: `ValueObject`, `Chronological`, `CheckedOrd` (`traits`)
//! - Temporal types: `Date`, `Time`, `DateTime`, `Duration` (`types`)
//! - Monetary types: `Currency`, `Money` (`types::currency`, `types::money`)
//! - Geographic types: `Latitude`, `Longitude`, `Altitude`, `GeoLocation`
//!   (`types::geo`), `Continent`, `Country`, `Address` (`types::region`)
//! - Contact types: `Email` (`types::email`)
//! - Error types: `DateError`, `TimeError`, `DurationError`, `MoneyError`,
//!   `GeoError`, `AddressError`, `EmailError`, `ParseError`, `ValueError`
//!   (`types::error`)
//!
//! Every value is validated at construction and never mutated afterwards.
//! Transformations return new values; invalid input is rejected with a typed
//! error rather than clamped or defaulted.
//!
//! ## Minimal Dependencies
//!
//! - chrono: Proleptic Gregorian calendar arithmetic
//! - rust_decimal: Exact decimal scalars for money amounts (never `f64`)
//! - regex: E-mail address validation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use valobs_core::types::{Currency, Date, DateTime, Duration, Money, Time};
//!
//! // Date operations
//! let leap_day = Date::from_ymd(2024, 2, 29).unwrap();
//! assert!(Date::from_ymd(2023, 2, 29).is_err());
//! assert_eq!(leap_day.add_days(1).unwrap().to_string(), "2024-03-01");
//!
//! // DateTime arithmetic rolls the date over
//! let late = DateTime::new(leap_day, Time::from_hm(23, 30).unwrap());
//! let shifted = late.checked_add(Duration::from_hours(2).unwrap()).unwrap();
//! assert_eq!(shifted.to_string(), "2024-03-01T01:30:00.000");
//!
//! // Money uses minor units and round-half-to-even
//! let dime = Money::of("0.10", "USD").unwrap();
//! assert_eq!(dime.multiply_int(3).unwrap().to_string(), "0.30 USD");
//! assert_eq!(dime.currency(), Currency::USD);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialise scalar value types as their canonical
//!   string, coordinates as numbers and composite geographic values as structs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;

pub use traits::{CheckedOrd, Chronological, ValueObject};
pub use types::{
    Address, Altitude, Continent, Country, CountryCode, Currency, Date, DateTime, Duration, Email,
    GeoLocation, Latitude, Longitude, Money, ParseError, Time, ValueError, Weekday,
};
