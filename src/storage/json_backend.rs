use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::Result,
};

use super::{validate_key, StorageBackend};

const VALUE_EXTENSION: &str = "json";

/// File-backed store: one JSON document per key under `<root>/store/`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    store_dir: PathBuf,
}

impl JsonStorage {
    /// Opens (and creates if needed) the store rooted at `root`, falling back
    /// to the application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        let store_dir = PathResolver::store_dir_in(&root);
        ensure_dir(&store_dir)?;
        tracing::debug!(path = %store_dir.display(), "opened json storage");
        Ok(Self { root, store_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Callers must validate the key first.
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.{VALUE_EXTENSION}"))
    }
}

impl StorageBackend for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.value_path(key);
        write_atomic(&path, value)?;
        tracing::debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        let path = self.value_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
