//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use valobs_core::Currency;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "valobs.toml";

const ENV_LOG_LEVEL: &str = "VALOBS_LOG_LEVEL";
const ENV_DEFAULT_CURRENCY: &str = "VALOBS_DEFAULT_CURRENCY";
const ENV_DURATION_FORMAT: &str = "VALOBS_DURATION_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid default currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid duration format: {0}. Must be one of: millis, units")]
    InvalidDurationFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How durations are printed in command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationFormat {
    /// Signed total milliseconds, the canonical form
    #[default]
    Millis,
    /// Unit form such as `1d2h3m4s5ms`
    Units,
}

impl FromStr for DurationFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "millis" | "ms" => Ok(DurationFormat::Millis),
            "units" => Ok(DurationFormat::Units),
            _ => Err(ConfigError::InvalidDurationFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for DurationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationFormat::Millis => write!(f, "millis"),
            DurationFormat::Units => write!(f, "units"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Currency assumed for money arguments given without a code
    #[serde(deserialize_with = "deserialize_currency")]
    pub default_currency: Currency,
    /// Output form for durations
    #[serde(deserialize_with = "deserialize_duration_format")]
    pub duration_format: DurationFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_currency<'de, D>(deserializer: D) -> Result<Currency, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_currency(&s).map_err(serde::de::Error::custom)
}

fn deserialize_duration_format<'de, D>(deserializer: D) -> Result<DurationFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DurationFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_currency(s: &str) -> Result<Currency, ConfigError> {
    Currency::from_str(s).map_err(|e| ConfigError::InvalidCurrency(e.to_string()))
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            default_currency: Currency::USD,
            duration_format: DurationFormat::Millis,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(code) = lookup(ENV_DEFAULT_CURRENCY) {
            self.default_currency = parse_currency(&code)?;
        }
        if let Some(format) = lookup(ENV_DURATION_FORMAT) {
            self.duration_format = DurationFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(code) = &cli.default_currency {
            self.default_currency = parse_currency(code)?;
        }
        if let Some(format) = &cli.duration_format {
            self.duration_format = DurationFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug unless `log_level` is set
    pub verbose: bool,
    /// Default currency override
    pub default_currency: Option<String>,
    /// Duration format override
    pub duration_format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = base_config(cli)?;
    config.apply_env()?;
    config.merge_with_cli(cli)?;
    Ok(config)
}

/// An explicit `--config` must exist; the default file is optional.
fn base_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    match &cli.config_file {
        Some(path) => CliConfig::from_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)
            } else {
                Ok(CliConfig::default())
            }
        }
    }
}
