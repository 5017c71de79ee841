//! Continents, countries and postal addresses.
//!
//! This module provides:
//! - `Continent`: The seven continents, with two-letter codes
//! - `CountryCode`: An ISO 3166-1 alpha-2 shaped code (`DE`, `JP`)
//! - `Country`: A country code with its display name
//! - `Address`: A postal address with an optional state or region line
//!
//! Country codes are checked for shape (two upper-case ASCII letters), not
//! against the ISO registry, which changes over time.
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::{Address, Country, Continent};
//!
//! let germany = Country::new("DE", "Germany").unwrap();
//! assert_eq!(germany.to_string(), "DE Germany");
//!
//! let office = Address::new("Unter den Linden 1", "Berlin", None, "10117", germany).unwrap();
//! assert_eq!(office.to_string(), "Unter den Linden 1\nBerlin\n10117\nDE Germany");
//!
//! assert_eq!("Europe".parse::<Continent>().unwrap().code(), "EU");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::{AddressError, ParseError};
use crate::traits::ValueObject;

/// One of the seven continents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Continent {
    /// Africa (AF)
    Africa,
    /// Antarctica (AN)
    Antarctica,
    /// Asia (AS)
    Asia,
    /// Europe (EU)
    Europe,
    /// North America (NA)
    NorthAmerica,
    /// Oceania (OC)
    Oceania,
    /// South America (SA)
    SouthAmerica,
}

impl Continent {
    /// Every continent, in alphabetical order.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Antarctica,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    /// Two-letter continent code.
    pub fn code(&self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Antarctica => "AN",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::Oceania => "OC",
            Continent::SouthAmerica => "SA",
        }
    }

    /// Name as written in the canonical form.
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "NorthAmerica",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "SouthAmerica",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Continent::ALL
            .into_iter()
            .find(|continent| continent.name() == s)
            .ok_or_else(|| ParseError::new(s, Self::CANONICAL_PATTERN, "unknown continent"))
    }
}

impl ValueObject for Continent {
    const CANONICAL_PATTERN: &'static str = "continent name, e.g. NorthAmerica";
}

/// Two upper-case ASCII letters identifying a country.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Creates a code, rejecting anything but two upper-case ASCII letters.
    pub fn new(code: &str) -> Result<Self, AddressError> {
        match code.as_bytes() {
            &[a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(Self([a, b])),
            _ => Err(AddressError::InvalidCountryCode(code.to_string())),
        }
    }

    /// Returns the code as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Parses the canonical form, which is the code itself.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::new(s).map_err(|e| ParseError::new(s, Self::CANONICAL_PATTERN, e.to_string()))
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        CountryCode::parse(s)
    }
}

impl ValueObject for CountryCode {
    const CANONICAL_PATTERN: &'static str = "CC";
}

/// Trims a text field and rejects blanks and control characters.
fn text_field(value: &str, field: &'static str) -> Result<String, AddressError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AddressError::EmptyField(field));
    }
    if value.chars().any(char::is_control) {
        return Err(AddressError::InvalidField {
            field,
            reason: "control characters are not allowed",
        });
    }
    Ok(value.to_string())
}

/// A country: its code and display name.
///
/// # Examples
///
/// ```
/// use valobs_core::types::Country;
///
/// let japan = Country::new("JP", " Japan ").unwrap();
/// assert_eq!(japan.code().as_str(), "JP");
/// assert_eq!(japan.name(), "Japan");
/// assert!(Country::new("jp", "Japan").is_err());
/// assert!(Country::new("JP", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Country {
    code: CountryCode,
    name: String,
}

impl Country {
    /// Creates a country; the name is trimmed and must not be blank.
    pub fn new(code: &str, name: &str) -> Result<Self, AddressError> {
        Ok(Self {
            code: CountryCode::new(code)?,
            name: text_field(name, "country name")?,
        })
    }

    /// Returns the country code.
    pub fn code(&self) -> CountryCode {
        self.code
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parses `<CC> <name>`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: String| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let (code, name) = s
            .split_once(' ')
            .ok_or_else(|| fail("missing space after country code".to_string()))?;
        let country = Self::new(code, name).map_err(|e| fail(e.to_string()))?;
        if country.name != name {
            return Err(fail("surrounding whitespace is not canonical".to_string()));
        }
        Ok(country)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

impl FromStr for Country {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Country::parse(s)
    }
}

impl ValueObject for Country {
    const CANONICAL_PATTERN: &'static str = "<CC> <name>";
}

/// A postal address.
///
/// Every text field is trimmed at construction. The state line is optional;
/// a blank state is stored as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    street: String,
    city: String,
    state: Option<String>,
    postal_code: String,
    country: Country,
}

impl Address {
    /// Creates an address, validating each field.
    ///
    /// # Returns
    /// - `AddressError::EmptyField` for a blank street, city or postal code
    /// - `AddressError::InvalidField` for control characters, or a postal
    ///   code holding anything but letters, digits, spaces and hyphens
    ///
    /// # Examples
    ///
    /// ```
    /// use valobs_core::types::{Address, AddressError, Country};
    ///
    /// let usa = Country::new("US", "United States").unwrap();
    /// let address = Address::new("1600 Amphitheatre Pkwy", "Mountain View", Some("CA"), "94043", usa.clone()).unwrap();
    /// assert_eq!(address.state(), Some("CA"));
    ///
    /// let err = Address::new("1 Main St", "  ", None, "94043", usa).unwrap_err();
    /// assert_eq!(err, AddressError::EmptyField("city"));
    /// ```
    pub fn new(
        street: &str,
        city: &str,
        state: Option<&str>,
        postal_code: &str,
        country: Country,
    ) -> Result<Self, AddressError> {
        let state = match state.map(str::trim) {
            Some(state) if !state.is_empty() => Some(text_field(state, "state")?),
            _ => None,
        };

        let postal_code = text_field(postal_code, "postal code")?;
        if !postal_code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
        {
            return Err(AddressError::InvalidField {
                field: "postal code",
                reason: "only letters, digits, spaces and hyphens",
            });
        }

        Ok(Self {
            street: text_field(street, "street")?,
            city: text_field(city, "city")?,
            state,
            postal_code,
            country,
        })
    }

    /// Street line.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// City line.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State, province or region, if any.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Postal code.
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Country.
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Parses the canonical multi-line form.
    ///
    /// Four lines are street, city, postal code and country; five lines
    /// carry the state between city and postal code.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let fail = |reason: String| ParseError::new(s, Self::CANONICAL_PATTERN, reason);

        let lines: Vec<&str> = s.split('\n').collect();
        let (street, city, state, postal_code, country) = match lines.as_slice() {
            &[street, city, postal_code, country] => (street, city, None, postal_code, country),
            &[street, city, state, postal_code, country] => {
                (street, city, Some(state), postal_code, country)
            }
            _ => return Err(fail(format!("expected 4 or 5 lines, found {}", lines.len()))),
        };

        let country = Country::parse(country).map_err(|e| fail(e.reason))?;
        let address = Self::new(street, city, state, postal_code, country)
            .map_err(|e| fail(e.to_string()))?;
        if address.to_string() != s {
            return Err(fail("surrounding whitespace is not canonical".to_string()));
        }
        Ok(address)
    }
}

impl fmt::Display for Address {
    /// One field per line, state omitted when absent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.street)?;
        writeln!(f, "{}", self.city)?;
        if let Some(state) = &self.state {
            writeln!(f, "{}", state)?;
        }
        writeln!(f, "{}", self.postal_code)?;
        write!(f, "{}", self.country)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Address::parse(s)
    }
}

impl ValueObject for Address {
    const CANONICAL_PATTERN: &'static str =
        "<street>\\n<city>\\n[<state>\\n]<postal code>\\n<CC> <country name>";
}
