use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{date, Amount, Transaction};
use crate::{Config, Result};
use std::str::FromStr;
use tracing::warn;

/// Appends one transaction to the ledger.
///
/// # Errors
/// - A format error if the date is not `DD-MM-YYYY` or the amount is not a number. Nothing is
///   written in that case.
/// - An I/O error if the ledger file cannot be appended to.
pub fn add(config: Config, args: AddArgs) -> Result<Out<Transaction>> {
    let amount = Amount::from_str(args.amount())?;
    let transaction = config.ledger().add_transaction(
        &args.date(),
        amount,
        args.category(),
        args.description(),
    )?;

    if !transaction.category().is_known() {
        warn!(
            "'{}' is neither Income nor Expense, so this transaction will not appear in reports",
            transaction.category()
        );
    }

    let message = format!(
        "Added {} of {} ({}) on {}",
        transaction.category(),
        transaction.amount().display_with(config.currency_symbol()),
        transaction.description(),
        date::format(transaction.date())
    );
    Ok(Out::new(message, transaction))
}
