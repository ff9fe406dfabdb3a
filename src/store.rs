//! The ledger file: a CSV file with the header `date,amount,category,description` and one row
//! per transaction, in the order the transactions were added.
//!
//! The file is only ever appended to. Nothing here rewrites or removes a row.

use crate::error::{Error, Result};
use crate::model::{
    date, Amount, Category, Transaction, TransactionColumn, AMOUNT_IDX, CATEGORY_IDX, DATE_IDX,
    DESCRIPTION_IDX, TRANSACTION_COL_COUNT,
};
use crate::query;
use csv::StringRecord;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, trace};

/// Owns the path of the ledger file and nothing else. Every operation goes to disk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the ledger file with only the header row if it does not exist yet. Calling this on
    /// an existing ledger does nothing.
    ///
    /// Returns `true` if the file was created.
    pub fn initialize(&self) -> Result<bool> {
        if !self.needs_header()? {
            trace!("Ledger file {} already exists", self.path.display());
            return Ok(false);
        }
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(TransactionColumn::headers())
            .map_err(|e| Error::from_csv(&self.path, e))?;
        writer.flush().map_err(|e| Error::io(&self.path, e))?;
        info!("Created ledger file {}", self.path.display());
        Ok(true)
    }

    /// Appends one row. Prior rows are neither read nor rewritten. The category is written as
    /// given, whether or not it is `Income` or `Expense`.
    pub fn append(&self, entry: &Transaction) -> Result<()> {
        // A ledger that was never initialized still gets its header before the first row.
        self.initialize()?;
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(to_record(entry))
            .map_err(|e| Error::from_csv(&self.path, e))?;
        writer.flush().map_err(|e| Error::io(&self.path, e))?;
        debug!(
            "Appended {} {} '{}' on {} to {}",
            entry.category(),
            entry.amount(),
            entry.description(),
            date::format(entry.date()),
            self.path.display()
        );
        Ok(())
    }

    /// Reads every transaction in file order.
    ///
    /// A missing file is an empty ledger. A row that cannot be parsed fails the whole load rather
    /// than being skipped.
    pub fn load_all(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "Ledger file {} does not exist, treating it as empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut transactions = Vec::new();
        let mut record = StringRecord::new();
        let mut first = true;
        while reader
            .read_record(&mut record)
            .map_err(|e| Error::from_csv(&self.path, e))?
        {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            if first {
                first = false;
                self.check_header(&record, line)?;
                continue;
            }
            let transaction = self.parse_record(&record, line)?;
            trace!("Loaded line {line}: {transaction:?}");
            transactions.push(transaction);
        }
        debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions)
    }

    /// Parses `date_text` as `DD-MM-YYYY` and appends the transaction.
    pub fn add_transaction(
        &self,
        date_text: &str,
        amount: impl Into<Amount>,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Result<Transaction> {
        let date = date::parse(date_text)?;
        let transaction = Transaction::new(date, amount, category, description);
        self.append(&transaction)?;
        Ok(transaction)
    }

    /// Loads the ledger and returns the transactions dated within `[start_text, end_text]`.
    pub fn query_range(&self, start_text: &str, end_text: &str) -> Result<Vec<Transaction>> {
        let range = query::DateRange::parse(start_text, end_text)?;
        let ledger = self.load_all()?;
        Ok(query::filter_range(&ledger, range))
    }

    /// True when the file is absent or zero bytes long.
    fn needs_header(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }

    fn check_header(&self, record: &StringRecord, line: u64) -> Result<()> {
        let expected = TransactionColumn::headers();
        if record.iter().ne(expected.iter().copied()) {
            return Err(Error::corrupt(
                &self.path,
                line,
                format!(
                    "expected the header '{}' but found '{}'",
                    expected.join(","),
                    record.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }
        Ok(())
    }

    fn parse_record(&self, record: &StringRecord, line: u64) -> Result<Transaction> {
        if record.len() != TRANSACTION_COL_COUNT {
            return Err(Error::corrupt(
                &self.path,
                line,
                format!(
                    "expected {TRANSACTION_COL_COUNT} columns but found {}",
                    record.len()
                ),
            ));
        }
        let field = |ix: usize| record.get(ix).unwrap_or_default();
        let date = date::parse(field(DATE_IDX))
            .map_err(|e| Error::corrupt(&self.path, line, e.to_string()))?;
        let amount = Amount::from_str(field(AMOUNT_IDX))
            .map_err(|e| Error::corrupt(&self.path, line, e.to_string()))?;
        Ok(Transaction::new(
            date,
            amount,
            field(CATEGORY_IDX),
            field(DESCRIPTION_IDX),
        ))
    }
}

fn to_record(t: &Transaction) -> [String; TRANSACTION_COL_COUNT] {
    let mut row: [String; TRANSACTION_COL_COUNT] = Default::default();
    row[DATE_IDX] = date::format(t.date());
    row[AMOUNT_IDX] = t.amount().to_string();
    row[CATEGORY_IDX] = t.category().to_string();
    row[DESCRIPTION_IDX] = t.description().to_string();
    row
}
