//! Key-value persistence backing the session
//!
//! String keys, string values, mutated synchronously and read-after-write
//! consistent within one process. The trait exists so tests can substitute
//! an in-memory store for the file-backed one (and so a different backing
//! could be swapped in without touching the session code).

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::StorageResult;

/// Persistence contract for session fields
pub trait KeyValueStore {
    /// Get a value by key
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Set a key-value pair, persisting immediately
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key, persisting immediately
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Purely in-memory store, used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store persisting all entries as one JSON object
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at the given path, loading existing entries.
    /// A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        info!("session store opened at {}", path.display());
        Ok(Self { path, entries })
    }

    fn flush(&self) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
