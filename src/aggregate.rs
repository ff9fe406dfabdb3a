//! Summaries of a set of transactions: totals, savings rate, breakdown by description, and
//! day or month series for charting.
//!
//! Everything here is a pure function of its arguments. Only `Income` and `Expense` rows are
//! counted; rows with any other category are ignored. Sums are checked: a total that leaves the
//! range of an [`Amount`] is an [`Error::Overflow`], never a panic.

use crate::error::{Error, Result};
use crate::model::{date, Amount, Bucket, Category, CombinedRow, Period, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Income, expense and their difference.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
    pub net: Amount,
}

impl Totals {
    pub fn savings_rate(&self) -> Result<Decimal> {
        savings_rate(self.income, self.expense)
    }
}

/// [`Totals`] plus the savings rate, as shown on a dashboard.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: Amount,
    pub expense: Amount,
    pub net: Amount,
    /// Percent of income not spent. Zero when there is no income.
    pub savings_rate: Decimal,
}

/// Sum of amounts per description, ordered by description.
pub type Breakdown = BTreeMap<String, Amount>;

pub fn totals(subset: &[Transaction]) -> Result<Totals> {
    let income = sum_category(subset, &Category::Income)?;
    let expense = sum_category(subset, &Category::Expense)?;
    Ok(Totals {
        income,
        expense,
        net: difference(income, expense)?,
    })
}

/// `(income - expense) / income * 100`, or zero if `income` is not positive.
///
/// Fails with [`Error::Overflow`] when the ratio does not fit in a `Decimal`, e.g. a tiny income
/// against a huge expense.
pub fn savings_rate(income: Amount, expense: Amount) -> Result<Decimal> {
    if !income.is_positive() {
        return Ok(Decimal::ZERO);
    }
    difference(income, expense)?
        .value()
        .checked_div(income.value())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| Error::overflow("the savings rate"))
}

pub fn summary(subset: &[Transaction]) -> Result<Summary> {
    let t = totals(subset)?;
    Ok(Summary {
        income: t.income,
        expense: t.expense,
        net: t.net,
        savings_rate: t.savings_rate()?,
    })
}

/// Groups the rows of `category` by exact description and sums each group.
pub fn by_description(subset: &[Transaction], category: &Category) -> Result<Breakdown> {
    let mut groups = Breakdown::new();
    for t in in_category(subset, category) {
        let sum = groups.entry(t.description().to_string()).or_default();
        *sum = sum.checked_add(t.amount()).ok_or_else(|| {
            Error::overflow(format!("the {category} total for '{}'", t.description()))
        })?;
    }
    Ok(groups)
}

/// Sums the rows of `category` per day or per month, in ascending date order.
///
/// Only buckets that contain at least one row are returned. See [`fill_gaps`] for a contiguous
/// series.
pub fn resample(
    subset: &[Transaction],
    category: &Category,
    period: Period,
) -> Result<Vec<Bucket>> {
    let mut buckets: BTreeMap<_, Amount> = BTreeMap::new();
    for t in in_category(subset, category) {
        let bucket = period.bucket(t.date());
        let sum = buckets.entry(bucket).or_default();
        *sum = sum.checked_add(t.amount()).ok_or_else(|| {
            Error::overflow(format!("the {category} total on {}", date::format(bucket)))
        })?;
    }
    Ok(buckets
        .into_iter()
        .map(|(date, amount)| Bucket { date, amount })
        .collect())
}

/// Outer-joins an income series and an expense series on bucket date. A date missing from one
/// side counts as zero on that side.
pub fn combine(income: &[Bucket], expense: &[Bucket]) -> Result<Vec<CombinedRow>> {
    let mut rows: BTreeMap<_, (Amount, Amount)> = BTreeMap::new();
    for b in income {
        let entry = rows.entry(b.date).or_default();
        entry.0 = add_on(entry.0, b)?;
    }
    for b in expense {
        let entry = rows.entry(b.date).or_default();
        entry.1 = add_on(entry.1, b)?;
    }
    rows.into_iter()
        .map(|(date, (income, expense))| {
            Ok(CombinedRow {
                date,
                income,
                expense,
                net: difference(income, expense)?,
            })
        })
        .collect()
}

/// Returns `series` with a zero bucket for every empty period between its first and last
/// bucket, for charts that need an unbroken time axis.
pub fn fill_gaps(series: &[Bucket], period: Period) -> Vec<Bucket> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (period.bucket(first.date), period.bucket(last.date)),
        _ => return Vec::new(),
    };
    let known: BTreeMap<_, Amount> = series
        .iter()
        .map(|b| (period.bucket(b.date), b.amount))
        .collect();
    let mut filled = Vec::with_capacity(known.len());
    let mut cursor = Some(first);
    while let Some(date) = cursor.filter(|d| *d <= last) {
        let amount = known.get(&date).copied().unwrap_or_default();
        filled.push(Bucket { date, amount });
        cursor = period.next(date);
    }
    filled
}

fn in_category<'a>(
    subset: &'a [Transaction],
    category: &'a Category,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    subset.iter().filter(move |t| t.category() == category)
}

fn sum_category(subset: &[Transaction], category: &Category) -> Result<Amount> {
    in_category(subset, category).try_fold(Amount::ZERO, |acc, t| {
        acc.checked_add(t.amount())
            .ok_or_else(|| Error::overflow(format!("the {category} total")))
    })
}

fn difference(income: Amount, expense: Amount) -> Result<Amount> {
    income
        .checked_sub(expense)
        .ok_or_else(|| Error::overflow("income minus expense"))
}

fn add_on(sum: Amount, bucket: &Bucket) -> Result<Amount> {
    sum.checked_add(bucket.amount)
        .ok_or_else(|| Error::overflow(format!("the total on {}", date::format(bucket.date))))
}
