//! Key-value storage backing the journal.
//!
//! The journal only needs string values under string keys, so the medium is
//! abstracted behind `KeyValueStore`. Every operation returns a `Result`; the
//! journal store decides when a failure degrades to an empty journal.

use crate::constants::{STORAGE_FILE_EXTENSION, STORAGE_LOCK_FILENAME};
use crate::errors::StorageError;
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A string key-value medium.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage, used for tests and for sessions without a writable medium.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key inside a directory.
///
/// Writes go through a temporary file in the same directory and are renamed
/// into place while an exclusive advisory lock is held, so readers never see a
/// partially written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that holds `key`.
    pub fn path_for_key(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(unavailable(
                key,
                io::Error::new(io::ErrorKind::InvalidInput, "invalid storage key"),
            ));
        }
        Ok(self
            .dir
            .join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }

    fn with_write_lock<T>(
        &self,
        key: &str,
        op: impl FnOnce() -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| unavailable(key, e))?;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(STORAGE_LOCK_FILENAME))
            .map_err(|e| unavailable(key, e))?;
        lock_file.lock_exclusive().map_err(|e| unavailable(key, e))?;

        let result = op();

        if let Err(e) = lock_file.unlock() {
            debug!("Failed to release storage lock: {}", e);
        }
        result
    }
}

fn unavailable(key: &str, source: io::Error) -> StorageError {
    StorageError::Unavailable {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for_key(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for_key(key)?;
        self.with_write_lock(key, || {
            let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| unavailable(key, e))?;
            temp.write_all(value.as_bytes())
                .and_then(|_| temp.flush())
                .map_err(|e| unavailable(key, e))?;
            temp.persist(&path).map_err(|e| unavailable(key, e.error))?;
            debug!("Stored {} bytes under {}", value.len(), key);
            Ok(())
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for_key(key)?;
        if !self.dir.exists() {
            return Ok(());
        }
        self.with_write_lock(key, || match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable(key, e)),
        })
    }
}
