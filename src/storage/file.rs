//! TOML-file backed key-value storage.
//!
//! Every write re-reads the file under an exclusive lock, applies the change
//! and replaces the file atomically (temp file + rename), so two header
//! instances sharing a file never lose each other's keys.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

type Entries = BTreeMap<String, String>;

/// Persistent [`KeyValueStore`] kept as a flat TOML table.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `~/.config/qa-header/storage.toml`, or the
    /// current directory when no config dir is available.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("qa-header").join("storage.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, StorageError> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn store(&self, entries: &Entries) -> Result<(), StorageError> {
        let content = toml::to_string(entries)?;
        let tmp_path = self.temp_path();

        fs::write(&tmp_path, content).map_err(|e| StorageError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StorageError> {
        let _lock = FileLock::acquire(&self.path)?;
        let mut entries = self.load()?;
        apply(&mut entries);
        self.store(&entries)
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// Exclusive lock on `<path>.lock`, released on drop.
///
/// The lock file itself stays on disk. Unlinking it would let a waiter keep
/// a lock on the removed inode while a newcomer locks a fresh file.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| StorageError::Io {
                path: lock_path.clone(),
                source: e,
            })?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| StorageError::Lock {
                path: lock_path.clone(),
                message: e.to_string(),
            })?;
        }

        Ok(Self { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            let _ = self.file.unlock();
        }
    }
}
