use log::warn;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_QUOTA_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug)]
pub enum StorageError {
    QuotaExceeded { needed: usize, quota: usize },
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QuotaExceeded { needed, quota } => write!(
                f,
                "storage quota exceeded (needs {} bytes, limit is {} bytes)",
                needed, quota
            ),
            StorageError::Io(err) => write!(f, "storage file error: {}", err),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// String key/value store with a byte quota. Writes either land fully or
/// leave the previous state intact.
pub trait KvBackend: Send {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
    fn used_bytes(&self) -> usize;
    fn quota_bytes(&self) -> usize;
}

fn usage_of(entries: &BTreeMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

fn usage_after(entries: &BTreeMap<String, String>, key: &str, value: &str) -> usize {
    let current = usage_of(entries);
    let replaced = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
    current - replaced + key.len() + value.len()
}

pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
    quota: usize,
}

impl MemoryBackend {
    pub fn new(quota: usize) -> Self {
        MemoryBackend {
            entries: BTreeMap::new(),
            quota,
        }
    }
}

impl KvBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let needed = usage_after(&self.entries, key, value);
        if needed > self.quota {
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota,
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn used_bytes(&self) -> usize {
        usage_of(&self.entries)
    }

    fn quota_bytes(&self) -> usize {
        self.quota
    }
}

/// Key/value store persisted as a single JSON object on disk. The whole
/// object is rewritten on every mutation.
pub struct FileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota: usize,
}

impl FileBackend {
    pub fn open<P: AsRef<Path>>(path: P, quota: usize) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("ignoring unreadable storage file {}: {}", path.display(), err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StorageError::Io(err)),
        };
        Ok(FileBackend {
            path,
            entries,
            quota,
        })
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| StorageError::Io(io::Error::new(io::ErrorKind::Other, err)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvBackend for FileBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let needed = usage_after(&self.entries, key, value);
        if needed > self.quota {
            return Err(StorageError::QuotaExceeded {
                needed,
                quota: self.quota,
            });
        }
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let previous = self.entries.remove(key);
        if let Some(old) = previous {
            if let Err(err) = self.persist() {
                self.entries.insert(key.to_string(), old);
                return Err(err);
            }
        }
        Ok(())
    }

    fn used_bytes(&self) -> usize {
        usage_of(&self.entries)
    }

    fn quota_bytes(&self) -> usize {
        self.quota
    }
}
