//! Error types for the ledger.
//!
//! Every fallible operation in the library returns [`Result`]. Callers that only need to show a
//! message can rely on `Display`; callers that need to react differently to bad input versus a
//! broken ledger file can match on the variant or use the `is_*` helpers.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The error type for ledger operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed date or amount text.
    #[error("Unable to parse '{input}': {reason}")]
    Format { input: String, reason: String },

    /// A file system failure while creating, reading or appending to a file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the ledger file could not be understood.
    #[error("Ledger file {} is corrupt at line {line}: {reason}", path.display())]
    LedgerCorrupt {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// A sum or ratio of amounts does not fit in an `Amount`.
    #[error("Amount out of range while computing {0}")]
    Overflow(String),

    /// The configuration file is missing required values or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl AsRef<Path>, line: u64, reason: impl Into<String>) -> Self {
        Self::LedgerCorrupt {
            path: path.as_ref().to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }

    /// Sorts a `csv::Error` into either an I/O failure or a corrupt ledger.
    pub(crate) fn from_csv(path: impl AsRef<Path>, e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or_default();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Self::io(path, io),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::corrupt(
                path,
                line,
                format!("expected {expected_len} columns but found {len}"),
            ),
            csv::ErrorKind::Utf8 { err, .. } => Self::corrupt(path, line, err.to_string()),
            other => Self::corrupt(path, line, format!("{other:?}")),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::LedgerCorrupt { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        let err = Error::format("5-3-2024", "expected DD-MM-YYYY");
        assert_eq!(err.to_string(), "Unable to parse '5-3-2024': expected DD-MM-YYYY");
        assert!(err.is_format());
        assert!(!err.is_io());
    }

    #[test]
    fn test_corrupt_display() {
        let err = Error::corrupt("/tmp/ledger.csv", 4, "expected 4 columns but found 3");
        assert_eq!(
            err.to_string(),
            "Ledger file /tmp/ledger.csv is corrupt at line 4: expected 4 columns but found 3"
        );
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_overflow_display() {
        let err = Error::overflow("the Income total");
        assert_eq!(
            err.to_string(),
            "Amount out of range while computing the Income total"
        );
        assert!(err.is_overflow());
        assert!(!err.is_format());
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error as _;
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io("/nope/ledger.csv", io_err);
        assert!(err.is_io());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("/nope/ledger.csv"));
    }
}
