//! Valobs CLI - Command Line Calculator for Value Types
//!
//! Parses, validates and combines dates, times, durations and money from the
//! command line, printing results in canonical form. Coordinates and e-mail
//! addresses can be validated too.
//!
//! # Commands
//!
//! - `valobs parse <kind> <input>` - Validate and canonicalise a value
//! - `valobs weekday <date>` - Day of the week
//! - `valobs add-days <date> <days>` - Calendar-day arithmetic
//! - `valobs shift <datetime> <duration>` - DateTime plus a signed Duration
//! - `valobs diff <later> <earlier>` - Duration between two DateTimes
//! - `valobs money <op> <left> <right>` - Money arithmetic and comparison

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::money::MoneyOp;
use commands::parse::ValueKind;
use config::{build_config, CliArgs, CliConfig};
use error::Result;

/// Valobs value type calculator
#[derive(Parser)]
#[command(name = "valobs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format) [default: valobs.toml if present]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Currency for money arguments given without a code
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Duration output format (millis, units)
    #[arg(long, global = true)]
    duration_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an input and print its canonical form
    Parse {
        /// Value type to read the input as
        #[arg(value_enum)]
        kind: ValueKind,

        /// Input text
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Print the day of the week of a date
    Weekday {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Add a signed number of days to a date
    AddDays {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Days to add; negative moves backwards
        #[arg(allow_hyphen_values = true)]
        days: i64,
    },

    /// Add a signed duration to a datetime
    Shift {
        /// DateTime (YYYY-MM-DDTHH:MM:SS[.mmm])
        datetime: String,

        /// Duration in milliseconds or units, e.g. 2h or -1d30m
        #[arg(allow_hyphen_values = true)]
        duration: String,
    },

    /// Print the duration from one datetime to another
    Diff {
        /// The later DateTime
        later: String,

        /// The earlier DateTime
        earlier: String,
    },

    /// Combine or compare money amounts
    Money {
        /// Operation to apply
        #[arg(value_enum)]
        op: MoneyOp,

        /// Left operand, e.g. "19.99 USD" or 19.99
        #[arg(allow_hyphen_values = true)]
        left: String,

        /// Right operand: money for add/sub/cmp, a decimal for mul/div
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            default_currency: cli.currency.clone(),
            duration_format: cli.duration_format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute(command: Commands, config: &CliConfig) -> Result<String> {
    match command {
        Commands::Parse { kind, input } => commands::parse::run(kind, &input, config),
        Commands::Weekday { date } => commands::temporal::weekday(&date),
        Commands::AddDays { date, days } => commands::temporal::add_days(&date, days),
        Commands::Shift { datetime, duration } => commands::temporal::shift(&datetime, &duration),
        Commands::Diff { later, earlier } => commands::temporal::diff(&later, &earlier, config),
        Commands::Money { op, left, right } => commands::money::run(op, &left, &right, config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        default_currency = %config.default_currency,
        duration_format = %config.duration_format,
        "Configuration loaded"
    );

    let output = execute(cli.command, &config).inspect_err(|e| {
        warn!(error = %e, "Command failed");
    })?;
    println!("{}", output);
    Ok(())
}
