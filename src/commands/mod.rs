//! Command handlers for the fintrack CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod add;
mod init;
mod list;
mod report;

use crate::args::RangeArgs;
use crate::model::Transaction;
use crate::query::{self, DateRange};
use crate::{Config, Result};
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info, warn};

pub use add::add;
pub use init::init;
pub use list::{list, Listing};
pub use report::{breakdown, series, summary, BreakdownReport, SeriesReport, SummaryReport};

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Log the message with `info!` and print the structured data (if it exists) as JSON to
    /// stdout. Logs go to stderr, so stdout carries only the machine-readable output.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                println!("{json}");
            }
        }
    }
}

const NO_TRANSACTIONS: &str = "No transactions found in the given date range.";

/// Loads the ledger and keeps the transactions within the requested range. Warns when nothing
/// matched.
fn select(config: &Config, args: &RangeArgs) -> Result<(DateRange, Vec<Transaction>)> {
    let range = DateRange::parse(&args.start(), &args.end())?;
    let ledger = config.ledger().load_all()?;
    let selected = query::filter_range(&ledger, range);
    debug!(
        "Selected {} of {} transactions from {range}",
        selected.len(),
        ledger.len()
    );
    if selected.is_empty() {
        warn!("{NO_TRANSACTIONS} ({range})");
    }
    Ok((range, selected))
}

/// `"1 transaction"`, `"3 transactions"`.
fn plural(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", if count == 1 { "" } else { "s" })
}
