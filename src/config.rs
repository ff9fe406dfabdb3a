//! Configuration file handling for fintrack.
//!
//! The configuration file is stored at `$FINTRACK_HOME/config.json`. It names the ledger file and
//! the currency symbol used when printing amounts.

use crate::error::{Error, Result};
use crate::fs;
use crate::store::LedgerStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "fintrack";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const LEDGER_CSV: &str = "finance_data.csv";
const CURRENCY_SYMBOL: &str = "₹";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$FINTRACK_HOME` and from there it loads `$FINTRACK_HOME/config.json`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    ledger: LedgerStore,
}

impl Config {
    /// Creates the home directory, writes a default `config.json` if there is none, and creates
    /// the ledger file if it does not exist. Existing files are left as they are, so this is safe
    /// to run more than once.
    pub fn create(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        fs::create_dir_all(&maybe_relative)?;
        let root = fs::canonicalize(&maybe_relative)?;
        let config_path = root.join(CONFIG_JSON);

        let config_file = if config_path.is_file() {
            ConfigFile::load(&config_path)?
        } else {
            let config_file = ConfigFile::default();
            config_file.save(&config_path)?;
            debug!("Wrote {}", config_path.display());
            config_file
        };

        let config = Self::new(root, config_path, config_file);
        config.ledger.initialize()?;
        Ok(config)
    }

    /// Loads `config.json` from `home`.
    ///
    /// When there is no `config.json` the defaults are used and nothing is written. Reading a
    /// ledger that was never initialized then behaves like reading an empty one.
    pub fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let root = home.into();
        let config_path = root.join(CONFIG_JSON);
        let config_file = if config_path.is_file() {
            ConfigFile::load(&config_path)?
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            ConfigFile::default()
        };
        Ok(Self::new(root, config_path, config_file))
    }

    fn new(root: PathBuf, config_path: PathBuf, config_file: ConfigFile) -> Self {
        let ledger_path = resolve(&root, config_file.ledger_path());
        Self {
            root,
            config_path,
            config_file,
            ledger: LedgerStore::new(ledger_path),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config_file.currency_symbol
    }
}

/// Returns `p` if it is absolute, otherwise `p` relative to `root`.
fn resolve(root: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        return p;
    }
    root.join(p)
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "fintrack",
///   "config_version": 1,
///   "ledger_path": "finance_data.csv",
///   "currency_symbol": "₹"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "fintrack"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Path to the ledger CSV file (optional, relative to the home directory or absolute)
    /// Defaults to $FINTRACK_HOME/finance_data.csv if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ledger_path: Option<PathBuf>,

    /// Prefix used when printing amounts
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
}

fn default_currency_symbol() -> String {
    CURRENCY_SYMBOL.to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            ledger_path: None,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it belongs to another app.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file at {}: {e}",
                path.display()
            ))
        })?;

        if config.app_name != APP_NAME {
            return Err(Error::Config(format!(
                "Invalid app_name in config file: expected '{}', got '{}'",
                APP_NAME, config.app_name
            )));
        }

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Unable to serialize config: {e}")))?;
        fs::write(path, data)
    }

    /// Gets the ledger path.
    ///
    /// If the path is relative, it should be interpreted as relative to the home directory.
    /// If None, defaults to $FINTRACK_HOME/finance_data.csv
    fn ledger_path(&self) -> PathBuf {
        self.ledger_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(LEDGER_CSV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_create() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("fintrack_home");

        let config = Config::create(&home).unwrap();

        assert!(config.config_path().is_file());
        assert!(config.ledger().path().is_file());
        assert!(config.ledger().path().ends_with(LEDGER_CSV));
        assert_eq!(config.currency_symbol(), "₹");
        assert!(config.ledger().load_all().unwrap().is_empty());
    }

    #[test]
    fn test_config_create_twice_keeps_ledger() {
        let dir = TempDir::new().unwrap();
        let config = Config::create(dir.path()).unwrap();
        config
            .ledger()
            .add_transaction("01-01-2024", crate::model::Amount::from(5), "Expense", "Tea")
            .unwrap();
        let again = Config::create(dir.path()).unwrap();
        assert_eq!(again.ledger().load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_config_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.ledger().path(), dir.path().join(LEDGER_CSV));
        assert!(config.ledger().load_all().unwrap().is_empty());
        assert!(!config.config_path().exists());
    }

    #[test]
    fn test_config_load_custom_values() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "app_name": "fintrack",
            "config_version": 1,
            "ledger_path": "books/2024.csv",
            "currency_symbol": "$"
        }"#;
        std::fs::write(dir.path().join(CONFIG_JSON), json).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(
            config.ledger().path(),
            dir.path().join("books").join("2024.csv")
        );
        assert_eq!(config.currency_symbol(), "$");
    }

    #[test]
    fn test_config_load_absolute_ledger_path() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let ledger = elsewhere.path().join("money.csv");
        let config_file = ConfigFile {
            ledger_path: Some(ledger.clone()),
            ..ConfigFile::default()
        };
        config_file.save(dir.path().join(CONFIG_JSON)).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.ledger().path(), ledger);
    }

    #[test]
    fn test_config_file_load_with_minimal_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        std::fs::write(&path, r#"{"app_name": "fintrack", "config_version": 1}"#).unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.ledger_path(), PathBuf::from(LEDGER_CSV));
        assert_eq!(config.currency_symbol, CURRENCY_SYMBOL);
    }

    #[test]
    fn test_config_file_load_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        std::fs::write(&path, r#"{"app_name": "tiller", "config_version": 1}"#).unwrap();

        let result = ConfigFile::load(&path);
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }

    #[test]
    fn test_config_file_load_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ConfigFile::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_file_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        let original = ConfigFile {
            ledger_path: Some(PathBuf::from("ledger.csv")),
            currency_symbol: "€".to_string(),
            ..ConfigFile::default()
        };
        original.save(&path).unwrap();
        assert_eq!(ConfigFile::load(&path).unwrap(), original);
    }

    #[test]
    fn test_config_file_serialization_omits_none_fields() {
        let json = serde_json::to_string(&ConfigFile::default()).unwrap();
        assert!(!json.contains("ledger_path"));
    }
}
