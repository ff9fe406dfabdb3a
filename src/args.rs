//! These structs provide the CLI interface for the fintrack CLI.

use crate::model::{date, Period};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// fintrack: A command-line tool for tracking personal income and expenses.
///
/// Transactions are appended to a CSV file in the fintrack home directory. Each transaction has a
/// date (DD-MM-YYYY), an amount, a category (Income or Expense) and a description. The reporting
/// commands select a date range and print totals, a breakdown by description, or a day/month
/// series as JSON on stdout.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the home directory, the configuration file and an empty ledger.
    ///
    /// Running it again is harmless: existing files are left untouched.
    Init,
    /// Append a transaction to the ledger.
    Add(AddArgs),
    /// List the transactions in a date range, followed by their totals.
    List(RangeArgs),
    /// Show total income, total expense, net savings and the savings rate for a date range.
    Summary(RangeArgs),
    /// Break down the Income or Expense transactions in a date range by description.
    Breakdown(BreakdownArgs),
    /// Show income, expense and net per day or per month for a date range.
    Series(SeriesArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the ledger and configuration are held. Defaults to ~/fintrack
    #[arg(long, env = "FINTRACK_HOME", default_value_t = default_fintrack_home())]
    fintrack_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, fintrack_home: PathBuf) -> Self {
        Self {
            log_level,
            fintrack_home: fintrack_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn fintrack_home(&self) -> &DisplayPath {
        &self.fintrack_home
    }
}

/// (Not shown): Args for the `fintrack add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The date of the transaction as DD-MM-YYYY. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// The amount, e.g. 1000 or 12.50
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// Income or Expense. Other values are stored but left out of every report.
    #[arg(long)]
    category: String,

    /// What the transaction was for. Reports group by this text.
    #[arg(long, default_value = "")]
    description: String,
}

impl AddArgs {
    pub fn new(
        date: Option<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// The date text, or today formatted as DD-MM-YYYY.
    pub fn date(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| date::format(Local::now().date_naive()))
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// (Not shown): Args for the commands that select a date range.
#[derive(Debug, Parser, Clone)]
pub struct RangeArgs {
    /// First day of the range as DD-MM-YYYY, inclusive. Defaults to the first of this month.
    #[arg(long)]
    start: Option<String>,

    /// Last day of the range as DD-MM-YYYY, inclusive. Defaults to today.
    #[arg(long)]
    end: Option<String>,
}

impl RangeArgs {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> String {
        self.start
            .clone()
            .unwrap_or_else(|| date::format(first_of_month(today())))
    }

    pub fn end(&self) -> String {
        self.end.clone().unwrap_or_else(|| date::format(today()))
    }
}

/// (Not shown): Args for the `fintrack breakdown` command.
#[derive(Debug, Parser, Clone)]
pub struct BreakdownArgs {
    #[clap(flatten)]
    range: RangeArgs,

    /// Which transactions to break down: Income or Expense
    #[arg(long, default_value = "Expense")]
    category: String,
}

impl BreakdownArgs {
    pub fn new(range: RangeArgs, category: impl Into<String>) -> Self {
        Self {
            range,
            category: category.into(),
        }
    }

    pub fn range(&self) -> &RangeArgs {
        &self.range
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// (Not shown): Args for the `fintrack series` command.
#[derive(Debug, Parser, Clone)]
pub struct SeriesArgs {
    #[clap(flatten)]
    range: RangeArgs,

    /// The bucket size: "day" or "month"
    #[arg(long, value_enum, default_value_t = Period::Month)]
    period: Period,

    /// Include a zero row for every empty day or month between the first and last row
    #[arg(long)]
    contiguous: bool,
}

impl SeriesArgs {
    pub fn new(range: RangeArgs, period: Period, contiguous: bool) -> Self {
        Self {
            range,
            period,
            contiguous,
        }
    }

    pub fn range(&self) -> &RangeArgs {
        &self.range
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn contiguous(&self) -> bool {
        self.contiguous
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

fn default_fintrack_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("fintrack"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --fintrack-home or FINTRACK_HOME instead of relying on the \
                default fintrack home directory. If you continue using the program right now, you \
                may have problems!",
            );
            PathBuf::from("fintrack")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
