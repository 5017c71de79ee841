//! Money command: arithmetic and comparison on two operands

use clap::ValueEnum;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use tracing::{debug, info};
use valobs_core::{CheckedOrd, ValueError};

use super::parse_money;
use crate::config::CliConfig;
use crate::error::{CliError, Result};

/// Operation applied by the money command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoneyOp {
    /// Sum of two amounts in the same currency
    Add,
    /// Difference of two amounts in the same currency
    Sub,
    /// Amount times a decimal scalar
    Mul,
    /// Amount divided by a decimal scalar
    Div,
    /// Ordering of two amounts in the same currency
    Cmp,
}

/// Run the money command
///
/// `right` is a money value for add, sub and cmp, and a decimal scalar for
/// mul and div.
pub fn run(op: MoneyOp, left: &str, right: &str, config: &CliConfig) -> Result<String> {
    let left = parse_money(left, config)?;
    info!(op = ?op, left = %left, right = %right, "Evaluating money operation");

    let result = match op {
        MoneyOp::Add => left.checked_add(parse_money(right, config)?),
        MoneyOp::Sub => left.checked_sub(parse_money(right, config)?),
        MoneyOp::Mul => left.multiply(parse_scalar(right)?),
        MoneyOp::Div => left.divide(parse_scalar(right)?),
        MoneyOp::Cmp => {
            let right = parse_money(right, config)?;
            let symbol = match left.try_cmp(&right).map_err(ValueError::from)? {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            return Ok(format!("{} {} {}", left, symbol, right));
        }
    };

    let result = result.map_err(ValueError::from)?;
    debug!(result = %result);
    Ok(result.to_string())
}

fn parse_scalar(input: &str) -> Result<Decimal> {
    Decimal::from_str_exact(input).map_err(|e| CliError::InvalidArgument {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
