use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result as FmtResult},
    fs, io,
    path::{Path, PathBuf},
};

/// Custom error type for storage writes
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(e) => write!(f, "Storage IO failed: {e}"),
            Self::Encode(e) => write!(f, "Failed to encode stored value: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e)
    }
}

/// A durable string key-value store
///
/// Reads fail open: anything unreadable is reported as absent. Writes are
/// synchronous from the caller's perspective.
pub trait Storage {
    /// Returns the stored value for `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key-value storage backed by one file per key under a data directory
///
/// The directory is created on the first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        ensure_dir(&self.dir)?;
        fs::write(self.key_path(key), value)?;

        Ok(())
    }
}

/// Ensures a directory exists, creating it if necessary
fn ensure_dir(path: &Path) -> Result<(), StorageError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    Ok(())
}

/// In-memory storage, substituted for [`FileStorage`] in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
