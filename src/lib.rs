//! fintrack keeps a personal ledger of income and expenses in an append-only CSV file and reports
//! on it: totals and savings rate over a date range, a breakdown by description, and daily or
//! monthly series.
//!
//! The ledger lives in a home directory (by default `~/fintrack`) next to a `config.json`. Dates
//! are always written and read as `DD-MM-YYYY`.

pub mod aggregate;
pub mod args;
pub mod commands;
mod config;
mod error;
mod fs;
pub mod model;
pub mod query;
pub mod store;


pub use config::Config;
pub use error::{Error, Result};
pub use store::LedgerStore;
