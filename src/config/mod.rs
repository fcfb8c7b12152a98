use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, write_atomic, PathResolver};
use crate::domain::transaction::parse_decimal;
use crate::errors::{Result, TrackerError};

/// User preferences persisted next to the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub locale: String,
    pub page_size: usize,
    /// Balance seeded on first load when nothing has been stored yet.
    pub starting_balance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            locale: "en-IN".into(),
            page_size: 5,
            starting_balance: 5000.0,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 4] = ["currency_symbol", "locale", "page_size", "starting_balance"];

    /// Updates one field from its textual form, validating the value.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency_symbol" => self.currency_symbol = value.trim().to_string(),
            "locale" => self.locale = value.trim().to_string(),
            "page_size" => {
                let size = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|size| *size >= 1)
                    .ok_or_else(|| {
                        TrackerError::Config(format!("page_size must be a positive integer, got `{value}`"))
                    })?;
                self.page_size = size;
            }
            "starting_balance" => {
                let balance = parse_decimal(value).filter(|v| *v >= 0.0).ok_or_else(|| {
                    TrackerError::Config(format!(
                        "starting_balance must be a non-negative number, got `{value}`"
                    ))
                })?;
                self.starting_balance = balance;
            }
            other => {
                return Err(TrackerError::Config(format!(
                    "unknown setting `{other}`; expected one of {}",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        let config_root = PathResolver::config_dir_in(&base);
        ensure_dir(&config_root)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the stored configuration, or the defaults when none exists.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 5);
        assert_eq!(config.starting_balance, 5000.0);
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set_field("page_size", "10").unwrap();
        config.set_field("currency_symbol", "$").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.page_size, 10);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"page_size": 8}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.page_size, 8);
        assert_eq!(loaded.starting_balance, 5000.0);
    }

    #[test]
    fn set_field_validates_values() {
        let mut config = Config::default();
        assert!(config.set_field("page_size", "0").is_err());
        assert!(config.set_field("page_size", "many").is_err());
        assert!(config.set_field("starting_balance", "-1").is_err());
        assert!(config.set_field("theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn formats_amounts_with_currency_symbol() {
        assert_eq!(Config::default().format_amount(1234.5), "₹1234.50");
    }
}
