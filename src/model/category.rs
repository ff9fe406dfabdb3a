use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub(super) const INCOME_STR: &str = "Income";
pub(super) const EXPENSE_STR: &str = "Expense";

/// The category column of a transaction.
///
/// Only `Income` and `Expense` take part in totals and series. Anything else read from the ledger
/// is kept verbatim in `Other` so that it survives a load and is still shown in raw listings.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Income,
    Expense,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Income => INCOME_STR,
            Category::Expense => EXPENSE_STR,
            Category::Other(s) => s.as_str(),
        }
    }

    /// Returns true for `Income` and `Expense`.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl FromStr for Category {
    type Err = Infallible;

    /// Matching is exact and case-sensitive: `income` becomes `Other("income")`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            INCOME_STR => Category::Income,
            EXPENSE_STR => Category::Expense,
            other => Category::Other(other.to_string()),
        })
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match Category::from_str(value) {
            Ok(c) => c,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Category::from(String::deserialize(deserializer)?))
    }
}
