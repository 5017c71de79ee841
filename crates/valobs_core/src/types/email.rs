//! E-mail addresses.
//!
//! An `Email` is trimmed and lower-cased at construction, then matched
//! against a practical `local@domain.tld` pattern. It does not attempt the
//! full RFC 5322 grammar: quoted local parts, comments and IP literals are
//! rejected.
//!
//! # Examples
//!
//! ```
//! use valobs_core::types::Email;
//!
//! let email = Email::new(" Ada.Lovelace@Example.ORG ").unwrap();
//! assert_eq!(email.as_str(), "ada.lovelace@example.org");
//! assert_eq!(email.domain(), "example.org");
//!
//! assert!(Email::new("not an address").is_err());
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::error::{EmailError, ParseError};
use crate::traits::ValueObject;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,64}$").expect("Invalid email regex pattern")
});

/// A validated, lower-case e-mail address.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email {
    address: String,
    at: usize,
}

impl Email {
    /// Longest accepted address, the limit of an SMTP forward path.
    pub const MAX_LENGTH: usize = 254;

    /// Normalises and validates an address.
    ///
    /// # Returns
    /// - `EmailError::TooLong` above [`Email::MAX_LENGTH`] characters
    /// - `EmailError::InvalidFormat` when it is not `local@domain.tld`
    pub fn new(address: &str) -> Result<Self, EmailError> {
        let normalised = address.trim().to_ascii_lowercase();
        if normalised.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                length: normalised.len(),
                max: Self::MAX_LENGTH,
            });
        }
        if !EMAIL_PATTERN.is_match(&normalised) {
            return Err(EmailError::InvalidFormat(address.to_string()));
        }
        let at = normalised
            .find('@')
            .ok_or_else(|| EmailError::InvalidFormat(address.to_string()))?;
        Ok(Self {
            address: normalised,
            at,
        })
    }

    /// Parses the canonical form, which must already be trimmed and lower-case.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let email =
            Self::new(s).map_err(|e| ParseError::new(s, Self::CANONICAL_PATTERN, e.to_string()))?;
        if email.address != s {
            return Err(ParseError::new(
                s,
                Self::CANONICAL_PATTERN,
                format!("not canonical, expected {}", email.address),
            ));
        }
        Ok(email)
    }

    /// Returns the whole address.
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// The part before `@`.
    pub fn local_part(&self) -> &str {
        &self.address[..self.at]
    }

    /// The part after `@`.
    pub fn domain(&self) -> &str {
        &self.address[self.at + 1..]
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for Email {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Email::parse(s)
    }
}

impl ValueObject for Email {
    const CANONICAL_PATTERN: &'static str = "local@domain.tld in lower case";
}
