//! CLI error types

use thiserror::Error;
use valobs_core::types::error::{ParseError, ValueError};

use crate::config::ConfigError;

/// Errors surfaced by `valobs` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value failed validation or an operation on it failed
    #[error("{0}")]
    Value(#[from] ValueError),

    /// An argument was not in canonical form
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An argument outside any value type, such as a scalar
    #[error("Invalid argument '{input}': {reason}")]
    InvalidArgument {
        /// The argument as given
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
