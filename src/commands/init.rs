use crate::commands::Out;
use crate::{Config, Result};
use std::path::Path;

/// Creates the home directory and:
/// - Creates an initial `config.json` file with default settings, unless one exists
/// - Creates the ledger file containing only the header row, unless one exists
///
/// # Arguments
/// - `fintrack_home` - The directory that will be the root of data directory, e.g.
///   `$HOME/fintrack`
///
/// # Errors
/// - Returns an error if any file operations fail.
pub fn init(fintrack_home: &Path) -> Result<Out<()>> {
    let config = Config::create(fintrack_home)?;
    Ok(format!(
        "The ledger is ready at {}",
        config.ledger().path().display()
    )
    .into())
}
