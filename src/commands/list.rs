use crate::aggregate::{self, Totals};
use crate::args::RangeArgs;
use crate::commands::{plural, select, Out, NO_TRANSACTIONS};
use crate::model::{date, Transaction};
use crate::query::DateRange;
use crate::{Config, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The transactions in a date range and their totals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub range: DateRange,
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
}

/// Lists the transactions dated within the range, in the order they were added, followed by total
/// income, total expense and net savings.
///
/// An empty range is reported with a warning, not an error.
pub fn list(config: Config, args: RangeArgs) -> Result<Out<Listing>> {
    let (range, transactions) = select(&config, &args)?;
    let totals = aggregate::totals(&transactions)?;

    if transactions.is_empty() {
        return Ok(Out::new(
            NO_TRANSACTIONS,
            Listing {
                range,
                transactions,
                totals,
            },
        ));
    }

    let symbol = config.currency_symbol();
    let mut message = format!("{} from {range}\n", plural(transactions.len(), "transaction"));
    for t in &transactions {
        let _ = writeln!(
            message,
            "  {}  {:<8} {:>14}  {}",
            date::format(t.date()),
            t.category().as_str(),
            t.amount().display_with(symbol),
            t.description()
        );
    }
    let _ = write!(
        message,
        "Total Income: {}  Total Expense: {}  Net Savings: {}",
        totals.income.display_with(symbol),
        totals.expense.display_with(symbol),
        totals.net.display_with(symbol)
    );

    Ok(Out::new(
        message,
        Listing {
            range,
            transactions,
            totals,
        },
    ))
}
