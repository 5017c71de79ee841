//! Geographic coordinates.
//!
//! This module provides:
//! - `Latitude`: Decimal degrees in [-90, 90]
//! - `Longitude`: Decimal degrees in [-180, 180]
//! - `Altitude`: Metres relative to sea level in [-1000, 10000]
//! - `GeoLocation`: A latitude, longitude and altitude triple
//!
//! Coordinates are finite `f64` values checked against their bounds at
//! construction. NaN and infinities never get in, and negative zero is
//! stored as zero, so equality and hashing compare bit patterns and agree
//! with each other.
//!
//! # Canonical form
//!
//! A coordinate's canonical string is the shortest decimal that reads back
//! to the same `f64` (`52.52`, `13.405`, `0`, `-1000`). Parsing accepts
//! exactly that spelling; `60.0`, `+60` and `6e1` are rejected.
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::{GeoLocation, Latitude};
//!
//! let berlin = GeoLocation::new(52.52, 13.405, 34.0).unwrap();
//! assert_eq!(berlin.to_string(), "52.52,13.405,34");
//! assert_eq!(berlin.latitude(), Latitude::new(52.52).unwrap());
//!
//! assert!(Latitude::new(90.5).is_err());
//! assert!(GeoLocation::new(0.0, f64::NAN, 0.0).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::error::{GeoError, ParseError};
use crate::traits::ValueObject;

/// Checks bounds and folds negative zero into zero.
fn bounded(value: f64, component: &'static str, min: f64, max: f64) -> Result<f64, GeoError> {
    if !value.is_finite() {
        return Err(GeoError::NotFinite { component });
    }
    if value < min || value > max {
        return Err(GeoError::OutOfRange {
            component,
            value,
            min,
            max,
        });
    }
    Ok(if value == 0.0 { 0.0 } else { value })
}

macro_rules! coordinate {
    (
        $(#[$doc:meta])*
        $name:ident, $component:literal, $min:expr, $max:expr, $pattern:literal
    ) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug)]
        pub struct $name(f64);

        impl $name {
            /// Smallest accepted value.
            pub const MIN: f64 = $min;
            /// Largest accepted value.
            pub const MAX: f64 = $max;

            #[doc = concat!("Creates a ", $component, " from a finite value within `MIN..=MAX`.")]
            pub fn new(value: f64) -> Result<Self, GeoError> {
                bounded(value, $component, Self::MIN, Self::MAX).map(Self)
            }

            /// Returns the value.
            pub fn value(&self) -> f64 {
                self.0
            }

            /// Parses the shortest decimal spelling that reads back to the value.
            pub fn parse(s: &str) -> Result<Self, ParseError> {
                let fail = |reason: String| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

                let value: f64 = s
                    .parse()
                    .map_err(|_| fail("not a decimal number".to_string()))?;
                let coordinate = Self::new(value).map_err(|e| fail(e.to_string()))?;
                if coordinate.to_string() != s {
                    return Err(fail(format!("not canonical, expected {}", coordinate)));
                }
                Ok(coordinate)
            }
        }

        impl AsRef<f64> for $name {
            fn as_ref(&self) -> &f64 {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.to_bits() == other.0.to_bits()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, ParseError> {
                Self::parse(s)
            }
        }

        impl ValueObject for $name {
            const CANONICAL_PATTERN: &'static str = $pattern;
        }
    };
}

coordinate! {
    /// North-south position in decimal degrees, positive north.
    Latitude, "latitude", -90.0, 90.0, "decimal degrees in [-90, 90]"
}

coordinate! {
    /// East-west position in decimal degrees, positive east.
    Longitude, "longitude", -180.0, 180.0, "decimal degrees in [-180, 180]"
}

coordinate! {
    /// Height above sea level in metres.
    Altitude, "altitude", -1000.0, 10000.0, "metres in [-1000, 10000]"
}

/// A point on (or near) the Earth's surface.
///
/// # Examples
///
/// ```
/// use valobs_core::types::{Altitude, GeoLocation};
///
/// let summit = GeoLocation::new(27.9881, 86.925, 8848.86).unwrap();
/// assert_eq!(summit.altitude(), Altitude::new(8848.86).unwrap());
///
/// let sea_level = GeoLocation::new_without_altitude(27.9881, 86.925).unwrap();
/// assert_eq!(sea_level.altitude().value(), 0.0);
/// assert_ne!(summit, sea_level);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeoLocation {
    latitude: Latitude,
    longitude: Longitude,
    altitude: Altitude,
}

impl GeoLocation {
    /// Creates a location from raw coordinates, validating each one.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, GeoError> {
        Ok(Self::from_parts(
            Latitude::new(latitude)?,
            Longitude::new(longitude)?,
            Altitude::new(altitude)?,
        ))
    }

    /// Creates a location at sea level.
    pub fn new_without_altitude(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        Self::new(latitude, longitude, 0.0)
    }

    /// Combines already validated coordinates.
    pub fn from_parts(latitude: Latitude, longitude: Longitude, altitude: Altitude) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Returns the latitude.
    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// Returns the longitude.
    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// Returns the altitude.
    pub fn altitude(&self) -> Altitude {
        self.altitude
    }

    /// Returns all three coordinates.
    pub fn coordinates(&self) -> (Latitude, Longitude, Altitude) {
        (self.latitude, self.longitude, self.altitude)
    }

    /// Parses `<latitude>,<longitude>,<altitude>` with each part canonical.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: String| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let mut parts = s.split(',');
        let (Some(latitude), Some(longitude), Some(altitude), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(fail("expected three comma-separated parts".to_string()));
        };

        Ok(Self::from_parts(
            Latitude::parse(latitude).map_err(|e| fail(e.reason))?,
            Longitude::parse(longitude).map_err(|e| fail(e.reason))?,
            Altitude::parse(altitude).map_err(|e| fail(e.reason))?,
        ))
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.latitude, self.longitude, self.altitude)
    }
}

impl FromStr for GeoLocation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        GeoLocation::parse(s)
    }
}

impl ValueObject for GeoLocation {
    const CANONICAL_PATTERN: &'static str = "<latitude>,<longitude>,<altitude>";
}
