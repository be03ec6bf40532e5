//! Key-value storage behind the history, account, and session stores.
//!
//! Records are JSON strings keyed by name, namespaced with the fixed
//! `footprint` application prefix. The file-backed implementation keeps one
//! file per key; tests use the in-memory implementation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

const KEY_PREFIX: &str = "footprint";

/// Storage key for one user's footprint history.
pub fn history_key(user_id: &str) -> String {
    format!("{KEY_PREFIX}_history_{user_id}")
}

/// Storage key for the account registry.
pub fn users_key() -> String {
    format!("{KEY_PREFIX}_users")
}

/// Storage key for the current session's signed-in user.
pub fn session_key() -> String {
    format!("{KEY_PREFIX}_user")
}

/// Minimal get/set/remove capability the stores are written against.
///
/// Writes are whole-record replacements. Read-modify-write sequences built
/// on top of this trait assume a single writer per key at a time; concurrent
/// writers to the same key can lose updates.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One JSON file per key under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage record {}", path.display()))?;
        Ok(Some(data))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
        }
        fs::write(&path, value)
            .with_context(|| format!("Failed to write storage record {}", path.display()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage record {}", path.display()))?;
        }
        Ok(())
    }
}

/// HashMap-backed storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}
