pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{Result, TrackerError};

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

/// Spendable balance after expenses.
pub const BALANCE_KEY: &str = "balanceAmount";
/// Income-adjusted balance before expenses.
pub const TOTAL_BALANCE_KEY: &str = "totalBalance";
/// Full transaction list.
pub const EXPENSES_KEY: &str = "expenses";

/// String-keyed store holding JSON-encoded values.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Reads and decodes the JSON value stored under `key`.
///
/// A missing key and an empty stored string both read as `None`.
pub fn read_json<T: DeserializeOwned>(store: &dyn StorageBackend, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Keys double as file names, so only a conservative alphabet is allowed.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(TrackerError::InvalidKey(key.to_string()))
    }
}
