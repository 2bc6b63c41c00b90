//! Directory-of-files key-value entries
//!
//! Each entry is `<dir>/<key>.json`. Keys are restricted so an entry can
//! never name a path outside the directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use voltdex_core::KvBackend;

use super::atomic::atomic_write;
use crate::errors::{io_error, Result, StoreError};

/// `KvBackend` storing one JSON file per entry
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Use `root` as the entry directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(StoreError::NotADirectory {
                path: root.display().to_string(),
            }
            .into());
        }
        fs::create_dir_all(&root).map_err(|e| io_error("create_entry_dir", e))?;
        tracing::debug!(root = %root.display(), "file backend opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            }
            .into());
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> voltdex_core::Result<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read_entry", e).into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> voltdex_core::Result<()> {
        let path = self.entry_path(key)?;
        atomic_write(&path, value.as_bytes())?;
        tracing::debug!(key, bytes = value.len(), "file entry written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> voltdex_core::Result<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "file entry removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove_entry", e).into()),
        }
    }
}
