//! Selecting the transactions that fall within a date range.

use crate::error::Result;
use crate::model::{date, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An inclusive date range. A range whose start is after its end is valid and matches nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(with = "date::serde_format")]
    start: NaiveDate,
    #[serde(with = "date::serde_format")]
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds as `DD-MM-YYYY`.
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self> {
        Ok(Self::new(date::parse(start_text)?, date::parse(end_text)?))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when no date can match, i.e. `start > end`.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", date::format(self.start), date::format(self.end))
    }
}

/// Returns the transactions dated within `[start_text, end_text]`, in ledger order.
///
/// Both bounds are parsed as `DD-MM-YYYY`; a malformed bound is an error. An empty result is not.
pub fn filter(ledger: &[Transaction], start_text: &str, end_text: &str) -> Result<Vec<Transaction>> {
    Ok(filter_range(ledger, DateRange::parse(start_text, end_text)?))
}

/// Same as [`filter`] with bounds that are already dates.
pub fn filter_dates(ledger: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    filter_range(ledger, DateRange::new(start, end))
}

pub fn filter_range(ledger: &[Transaction], range: DateRange) -> Vec<Transaction> {
    if range.is_empty() {
        return Vec::new();
    }
    ledger
        .iter()
        .filter(|t| range.contains(t.date()))
        .cloned()
        .collect()
}
