//! CLI command implementations
//!
//! Each submodule implements one group of commands. Commands return their
//! output as a `String`; `main` prints it.

pub mod money;
pub mod parse;
pub mod temporal;

use valobs_core::{Duration, Money, ValueError};

use crate::config::{CliConfig, DurationFormat};
use crate::error::Result;

/// Formats a duration in the configured output form.
pub fn format_duration(duration: Duration, config: &CliConfig) -> String {
    match config.duration_format {
        DurationFormat::Millis => duration.to_string(),
        DurationFormat::Units => duration.to_unit_string(),
    }
}

/// Reads a money argument.
///
/// `"19.99 USD"` must be canonical; a bare amount such as `"19.99"` takes the
/// configured default currency.
pub fn parse_money(input: &str, config: &CliConfig) -> Result<Money> {
    if input.contains(' ') {
        return Ok(Money::parse(input)?);
    }
    Money::of(input, config.default_currency.code())
        .map_err(|e| ValueError::from(e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use valobs_core::Currency;

    #[test]
    fn test_format_duration() {
        let duration = Duration::parse("1d2h").unwrap();
        let mut config = CliConfig::default();
        assert_eq!(format_duration(duration, &config), "93600000");

        config.duration_format = DurationFormat::Units;
        assert_eq!(format_duration(duration, &config), "1d2h");
    }

    #[test]
    fn test_parse_money_with_default_currency() {
        let mut config = CliConfig::default();
        config.default_currency = Currency::EUR;

        let bare = parse_money("12.5", &config).unwrap();
        assert_eq!(bare, Money::of("12.50", "EUR").unwrap());

        let explicit = parse_money("12.50 GBP", &config).unwrap();
        assert_eq!(explicit.currency(), Currency::GBP);
    }

    #[test]
    fn test_parse_money_rejects_bad_input() {
        let config = CliConfig::default();
        assert!(parse_money("12.5 GBP", &config).is_err());
        assert!(parse_money("12.505", &config).is_err());
        assert!(parse_money("twelve", &config).is_err());
    }
}
