//! Report commands: summary metrics, a breakdown by description, and a day/month series.

use crate::aggregate::{self, Breakdown, Summary};
use crate::args::{BreakdownArgs, RangeArgs, SeriesArgs};
use crate::commands::{plural, select, Out, NO_TRANSACTIONS};
use crate::model::{date, Bucket, Category, CombinedRow, Period};
use crate::query::DateRange;
use crate::{Config, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub range: DateRange,
    pub summary: Summary,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BreakdownReport {
    pub range: DateRange,
    pub category: Category,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    pub range: DateRange,
    pub period: Period,
    pub rows: Vec<CombinedRow>,
}

/// Total income, total expense, net savings and savings rate for the range.
pub fn summary(config: Config, args: RangeArgs) -> Result<Out<SummaryReport>> {
    let (range, transactions) = select(&config, &args)?;
    let summary = aggregate::summary(&transactions)?;
    let symbol = config.currency_symbol();
    let message = if transactions.is_empty() {
        NO_TRANSACTIONS.to_string()
    } else {
        format!(
            "Total Income: {}  Total Expense: {}  Net Savings: {}  Savings Rate: {:.1}%",
            summary.income.display_with(symbol),
            summary.expense.display_with(symbol),
            summary.net.display_with(symbol),
            summary.savings_rate
        )
    };
    Ok(Out::new(message, SummaryReport { range, summary }))
}

/// Sums the transactions of one category per description.
pub fn breakdown(config: Config, args: BreakdownArgs) -> Result<Out<BreakdownReport>> {
    let (range, transactions) = select(&config, args.range())?;
    let category = Category::from(args.category());
    let breakdown = aggregate::by_description(&transactions, &category)?;

    let message = if breakdown.is_empty() {
        format!("No {category} data available for the selected period.")
    } else {
        let symbol = config.currency_symbol();
        let mut message = format!("Breakdown of {category} by description from {range}");
        for (description, amount) in &breakdown {
            let _ = write!(
                message,
                "\n  {:<24} {:>14}",
                description,
                amount.display_with(symbol)
            );
        }
        message
    };

    Ok(Out::new(
        message,
        BreakdownReport {
            range,
            category,
            breakdown,
        },
    ))
}

/// Income, expense and net per day or month.
///
/// With `--contiguous`, every period between the first and last row is present, with zeros where
/// nothing happened.
pub fn series(config: Config, args: SeriesArgs) -> Result<Out<SeriesReport>> {
    let (range, transactions) = select(&config, args.range())?;
    let period = args.period();
    let income = aggregate::resample(&transactions, &Category::Income, period)?;
    let expense = aggregate::resample(&transactions, &Category::Expense, period)?;
    let mut rows = aggregate::combine(&income, &expense)?;

    if args.contiguous() {
        // Income on every date of the joined axis, zero in the gaps, then join expense back in.
        let axis: Vec<Bucket> = rows.iter().map(|r| Bucket::new(r.date, r.income)).collect();
        rows = aggregate::combine(&aggregate::fill_gaps(&axis, period), &expense)?;
    }

    let message = if rows.is_empty() {
        NO_TRANSACTIONS.to_string()
    } else {
        let symbol = config.currency_symbol();
        let mut message = format!(
            "{} per {period} from {range}\n  {:<10} {:>14} {:>14} {:>14}",
            plural(rows.len(), "row"),
            "date",
            "income",
            "expense",
            "net"
        );
        for row in &rows {
            let _ = write!(
                message,
                "\n  {:<10} {:>14} {:>14} {:>14}",
                bucket_label(row.date, period),
                row.income.display_with(symbol),
                row.expense.display_with(symbol),
                row.net.display_with(symbol)
            );
        }
        message
    };

    Ok(Out::new(
        message,
        SeriesReport {
            range,
            period,
            rows,
        },
    ))
}

fn bucket_label(bucket: chrono::NaiveDate, period: Period) -> String {
    match period {
        Period::Day => date::format(bucket),
        Period::Month => bucket.format("%m-%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::{range, TestEnv};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_summary_january() {
        let env = TestEnv::new();
        env.insert_january();
        let out = summary(env.config(), range("01-01-2024", "31-01-2024")).unwrap();
        let s = out.structure().unwrap().summary;
        assert_eq!(s.income, Amount::from(1100));
        assert_eq!(s.expense, Amount::from(550));
        assert_eq!(s.net, Amount::from(550));
        assert_eq!(s.savings_rate, Decimal::from(50));
        assert!(out.message().ends_with("Savings Rate: 50.0%"), "{}", out.message());
    }

    #[test]
    fn test_summary_two_row_scenario() {
        let env = TestEnv::new();
        env.insert("15-01-2024", "1000.00", "Income", "Salary");
        env.insert("20-01-2024", "200.00", "Expense", "Groceries");
        let out = summary(env.config(), range("01-01-2024", "31-01-2024")).unwrap();
        let s = out.structure().unwrap().summary;
        assert_eq!(s.net, Amount::from(800));
        assert_eq!(s.savings_rate, Decimal::from(80));
    }

    #[test]
    fn test_summary_no_income() {
        let env = TestEnv::new();
        env.insert("20-01-2024", "200.00", "Expense", "Groceries");
        let out = summary(env.config(), range("01-01-2024", "31-01-2024")).unwrap();
        let s = out.structure().unwrap().summary;
        assert_eq!(s.savings_rate, Decimal::ZERO);
        assert_eq!(s.net, Amount::from(-200));
    }

    #[test]
    fn test_summary_empty() {
        let env = TestEnv::new();
        let out = summary(env.config(), range("01-01-2024", "31-01-2024")).unwrap();
        assert_eq!(out.message(), NO_TRANSACTIONS);
        assert_eq!(out.structure().unwrap().summary, Summary::default());
    }

    #[test]
    fn test_breakdown_expense() {
        let env = TestEnv::new();
        env.insert_january();
        let args = BreakdownArgs::new(range("01-01-2024", "31-01-2024"), "Expense");
        let out = breakdown(env.config(), args).unwrap();
        let report = out.structure().unwrap();
        assert_eq!(report.category, Category::Expense);
        assert_eq!(report.breakdown.len(), 2);
        assert_eq!(report.breakdown["Groceries"], Amount::from(250));
        assert_eq!(report.breakdown["Rent"], Amount::from(300));
    }

    #[test]
    fn test_breakdown_income() {
        let env = TestEnv::new();
        env.insert("01-01-2024", "500", "Income", "Salary");
        env.insert("02-01-2024", "100", "Income", "Bonus");
        env.insert("03-01-2024", "500", "Income", "Salary");
        let args = BreakdownArgs::new(range("01-01-2024", "31-01-2024"), "Income");
        let out = breakdown(env.config(), args).unwrap();
        let report = out.structure().unwrap();
        assert_eq!(report.breakdown["Salary"], Amount::from(1000));
        assert_eq!(report.breakdown["Bonus"], Amount::from(100));
    }

    #[test]
    fn test_breakdown_nothing_in_category() {
        let env = TestEnv::new();
        env.insert("01-01-2024", "500", "Income", "Salary");
        let args = BreakdownArgs::new(range("01-01-2024", "31-01-2024"), "Expense");
        let out = breakdown(env.config(), args).unwrap();
        assert_eq!(
            out.message(),
            "No Expense data available for the selected period."
        );
        assert!(out.structure().unwrap().breakdown.is_empty());
    }

    #[test]
    fn test_series_monthly() {
        let env = TestEnv::new();
        env.insert_january();
        let args = SeriesArgs::new(range("01-01-2024", "29-02-2024"), Period::Month, false);
        let out = series(env.config(), args).unwrap();
        let rows = &out.structure().unwrap().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, d(2024, 1, 1));
        assert_eq!(rows[0].income, Amount::from(1100));
        assert_eq!(rows[0].expense, Amount::from(550));
        assert_eq!(rows[1].date, d(2024, 2, 1));
        assert!(rows[1].income.is_zero());
        assert_eq!(rows[1].net, Amount::from(-40));
        assert!(out.message().contains("02-2024"));
    }

    #[test]
    fn test_series_daily_sparse() {
        let env = TestEnv::new();
        env.insert_january();
        let args = SeriesArgs::new(range("01-01-2024", "31-01-2024"), Period::Day, false);
        let out = series(env.config(), args).unwrap();
        let dates: Vec<_> = out
            .structure()
            .unwrap()
            .rows
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(
            dates,
            vec![d(2024, 1, 15), d(2024, 1, 20), d(2024, 1, 25), d(2024, 1, 31)]
        );
    }

    #[test]
    fn test_series_daily_contiguous() {
        let env = TestEnv::new();
        env.insert("01-03-2024", "10", "Income", "Gift");
        env.insert("04-03-2024", "3", "Expense", "Snack");
        let args = SeriesArgs::new(range("01-03-2024", "31-03-2024"), Period::Day, true);
        let out = series(env.config(), args).unwrap();
        let rows = &out.structure().unwrap().rows;
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].net, Amount::from(10));
        assert!(rows[1].income.is_zero() && rows[1].expense.is_zero());
        assert!(rows[2].net.is_zero());
        assert_eq!(rows[3].date, d(2024, 3, 4));
        assert_eq!(rows[3].net, Amount::from(-3));
    }

    #[test]
    fn test_series_empty() {
        let env = TestEnv::new();
        let args = SeriesArgs::new(range("01-03-2024", "31-03-2024"), Period::Month, true);
        let out = series(env.config(), args).unwrap();
        assert_eq!(out.message(), NO_TRANSACTIONS);
        assert!(out.structure().unwrap().rows.is_empty());
    }

    #[test]
    fn test_reports_out_of_range_are_errors() {
        let env = TestEnv::new();
        env.insert("01-01-2024", "50000000000000000000000000000", "Income", "Salary");
        env.insert("02-01-2024", "50000000000000000000000000000", "Income", "Salary");
        let jan = || range("01-01-2024", "31-01-2024");

        assert!(summary(env.config(), jan()).unwrap_err().is_overflow());
        let args = BreakdownArgs::new(jan(), "Income");
        assert!(breakdown(env.config(), args).unwrap_err().is_overflow());
        let args = SeriesArgs::new(jan(), Period::Month, false);
        assert!(series(env.config(), args).unwrap_err().is_overflow());

        // Per day the two rows stay in separate buckets.
        let args = SeriesArgs::new(jan(), Period::Day, true);
        assert_eq!(series(env.config(), args).unwrap().structure().unwrap().rows.len(), 2);
    }
}
