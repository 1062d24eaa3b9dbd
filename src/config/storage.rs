//! Key/value persistence backends
//!
//! The config store talks to durable storage through the [`Storage`] trait so
//! the load/save rules can be tested without touching the filesystem.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::storage::{APP_DIR, FILE_EXTENSION};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string key/value storage
pub trait Storage {
    /// Stored value for `key`, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config_dir>/startdeck`, or `./startdeck` when the platform has no config dir
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{FILE_EXTENSION}"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored value");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }
}

#[cfg(test)]
pub mod memory {
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    use super::{Storage, StorageError};

    /// In-memory storage with a write counter
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        pub entries: HashMap<String, String>,
        pub writes: usize,
    }

    impl MemoryStorage {
        pub fn with_value(key: &str, value: &str) -> Self {
            let mut storage = Self::default();
            storage.entries.insert(key.to_string(), value.to_string());
            storage
        }
    }

    impl Storage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries.insert(key.to_string(), value.to_string());
            self.writes += 1;
            Ok(())
        }
    }

    /// Storage that is always full
    #[derive(Debug, Default)]
    pub struct FullStorage;

    impl Storage for FullStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: PathBuf::from("quota"),
                source: io::Error::other("storage full"),
            })
        }
    }
}
