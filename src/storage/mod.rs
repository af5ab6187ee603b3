//! Key-value persistence for whole JSON documents.
//!
//! The stores write each document under a fixed string key. `FileStorage`
//! keeps one `<key>.json` file per key in a data directory; `MemoryStorage`
//! backs tests and embedding without touching disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::errors::StoreError;

/// Storage key for the site content document.
pub const CONTENT_KEY: &str = "ole_restaurant_data";

/// Storage key for the admin session record.
pub const SESSION_KEY: &str = "ole_restaurant_admin";

/// A flat key-value store holding serialized JSON documents.
pub trait Storage: Send + Sync {
    /// Read the value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Directory-backed storage: one JSON file per key.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| {
            StoreError::Storage(format!("Cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                // Unreadable is treated the same as absent
                tracing::warn!("Cannot read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| StoreError::Storage(format!("Cannot write {}: {}", path.display(), e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Storage(format!(
                "Cannot remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory storage for tests and ephemeral embedding.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Storage("Storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Storage("Storage lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
