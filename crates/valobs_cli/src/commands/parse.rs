//! Parse command: validate an input and print its canonical form

use clap::ValueEnum;
use tracing::{debug, info};
use valobs_core::{Date, DateTime, Duration, Email, GeoLocation, Time, ValueError};

use super::{format_duration, parse_money};
use crate::config::CliConfig;
use crate::error::Result;

/// The value type an input is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// Calendar date, YYYY-MM-DD
    Date,
    /// Time of day, HH:MM:SS[.mmm]
    Time,
    /// Date and time, YYYY-MM-DDTHH:MM:SS[.mmm]
    Datetime,
    /// Signed duration in milliseconds or units, e.g. 1h30m
    Duration,
    /// Amount with currency code, or a bare amount in the default currency
    Money,
    /// Latitude,longitude,altitude in degrees and metres
    Geolocation,
    /// E-mail address, normalised to lower case
    Email,
}

/// Run the parse command
pub fn run(kind: ValueKind, input: &str, config: &CliConfig) -> Result<String> {
    info!(kind = ?kind, "Parsing value");
    debug!(input = %input);

    let canonical = match kind {
        ValueKind::Date => Date::parse(input)?.to_string(),
        ValueKind::Time => Time::parse(input)?.to_string(),
        ValueKind::Datetime => DateTime::parse(input)?.to_string(),
        ValueKind::Duration => format_duration(Duration::parse(input)?, config),
        ValueKind::Money => parse_money(input, config)?.to_string(),
        ValueKind::Geolocation => GeoLocation::parse(input)?.to_string(),
        ValueKind::Email => Email::new(input).map_err(ValueError::from)?.to_string(),
    };

    debug!(canonical = %canonical, "Parsed");
    Ok(canonical)
}
