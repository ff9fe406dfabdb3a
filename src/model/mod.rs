//! Types that represent the core data model, such as `Transaction` and `Amount`.
mod amount;
mod category;
pub mod date;
mod transaction;

pub use amount::Amount;
pub use category::Category;
pub use transaction::{Transaction, TransactionColumn};

pub(crate) use transaction::{
    AMOUNT_IDX, CATEGORY_IDX, DATE_IDX, DESCRIPTION_IDX, TRANSACTION_COL_COUNT,
};

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// The width of a time bucket when resampling.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Day,
    Month,
}

serde_plain::derive_display_from_serialize!(Period);
serde_plain::derive_fromstr_from_deserialize!(Period);

impl Period {
    /// Truncates `date` to the start of the bucket that contains it.
    pub fn bucket(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Day => date,
            Period::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// The start of the bucket after the one starting at `bucket`. `None` past the end of the
    /// calendar.
    pub fn next(&self, bucket: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Day => bucket.succ_opt(),
            Period::Month => self.bucket(bucket).checked_add_months(Months::new(1)),
        }
    }
}

/// One point of a resampled series: the sum of amounts that fell in the bucket starting at
/// `date`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(with = "date::serde_format")]
    pub date: NaiveDate,
    pub amount: Amount,
}

impl Bucket {
    pub fn new(date: NaiveDate, amount: impl Into<Amount>) -> Self {
        Self {
            date,
            amount: amount.into(),
        }
    }
}

/// One row of a combined income and expense series.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct CombinedRow {
    #[serde(with = "date::serde_format")]
    pub date: NaiveDate,
    pub income: Amount,
    pub expense: Amount,
    pub net: Amount,
}
