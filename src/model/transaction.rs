use crate::model::{date, Amount, Category};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single row of the ledger file.
///
/// There is no identifier. Two rows with identical values are two separate transactions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    #[serde(with = "date::serde_format")]
    date: NaiveDate,
    amount: Amount,
    category: Category,
    description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: impl Into<Amount>,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The columns of the ledger file, in file order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionColumn {
    Date,
    Amount,
    Category,
    Description,
}

serde_plain::derive_display_from_serialize!(TransactionColumn);
serde_plain::derive_fromstr_from_deserialize!(TransactionColumn);

impl TransactionColumn {
    /// All columns in the order they appear in the header row.
    pub const ALL: [TransactionColumn; TRANSACTION_COL_COUNT] = [
        TransactionColumn::Date,
        TransactionColumn::Amount,
        TransactionColumn::Category,
        TransactionColumn::Description,
    ];

    pub fn as_header_str(&self) -> &'static str {
        match self {
            TransactionColumn::Date => DATE_STR,
            TransactionColumn::Amount => AMOUNT_STR,
            TransactionColumn::Category => CATEGORY_STR,
            TransactionColumn::Description => DESCRIPTION_STR,
        }
    }

    /// The header row of the ledger file.
    pub fn headers() -> [&'static str; TRANSACTION_COL_COUNT] {
        Self::ALL.map(|c| c.as_header_str())
    }
}

pub(crate) const DATE_STR: &str = "date";
pub(crate) const DATE_IDX: usize = 0;

pub(crate) const AMOUNT_STR: &str = "amount";
pub(crate) const AMOUNT_IDX: usize = 1;

pub(crate) const CATEGORY_STR: &str = "category";
pub(crate) const CATEGORY_IDX: usize = 2;

pub(crate) const DESCRIPTION_STR: &str = "description";
pub(crate) const DESCRIPTION_IDX: usize = 3;

pub(crate) const TRANSACTION_COL_COUNT: usize = 4;
