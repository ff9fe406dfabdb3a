//! The one date format used by the ledger file and by every date the user types: `DD-MM-YYYY`.
//!
//! Parsing is strict. `5-3-2024`, `05/03/2024` and `2024-03-05` are all rejected, so that every
//! stored date string round-trips exactly through [`parse`] and [`format`].

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// The chrono pattern behind `DD-MM-YYYY`.
pub const FORMAT: &str = "%d-%m-%Y";

const LEN: usize = 10;
const SEPARATORS: [usize; 2] = [2, 5];

/// Parses `DD-MM-YYYY` text into a date.
///
/// # Examples
/// ```
/// # use fintrack::model::date;
/// let d = date::parse("05-03-2024").unwrap();
/// assert_eq!(date::format(d), "05-03-2024");
/// assert!(date::parse("5-3-2024").is_err());
/// ```
pub fn parse(text: &str) -> Result<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != LEN {
        return Err(Error::format(text, "expected a date formatted as DD-MM-YYYY"));
    }
    for (ix, b) in bytes.iter().enumerate() {
        let ok = if SEPARATORS.contains(&ix) {
            *b == b'-'
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return Err(Error::format(text, "expected a date formatted as DD-MM-YYYY"));
        }
    }
    NaiveDate::parse_from_str(text, FORMAT).map_err(|e| Error::format(text, e.to_string()))
}

/// Formats a date as `DD-MM-YYYY`.
pub fn format(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

/// Serde adapter for `#[serde(with = "crate::model::date::serde_format")]` fields.
pub(crate) mod serde_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(*date))
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse(&s).map_err(serde::de::Error::custom)
    }
}
