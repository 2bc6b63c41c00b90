//! Persistence medium abstraction
//!
//! The store keeps one entry per table, keyed by the table's storage key,
//! holding the table's records as a JSON array. Backends only move strings;
//! shape is the store's responsibility.

use std::collections::BTreeMap;

use crate::errors::Result;

/// Key-value persistence medium
pub trait KvBackend {
    /// Read an entry; `None` if the key was never written or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Create or replace an entry
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove an entry; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<B: KvBackend + ?Sized> KvBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process backend; contents vanish with the value
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently present, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
