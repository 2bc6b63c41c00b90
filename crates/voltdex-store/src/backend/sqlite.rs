//! SQLite-backed key-value entries
//!
//! Each entry is one row of `kv_entries`; the schema is owned by the
//! migration runner.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use voltdex_core::KvBackend;

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;

/// `KvBackend` over a single SQLite connection
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) a database file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path.as_ref())?;
        db::configure(&conn)?;
        tracing::debug!(path = %path.as_ref().display(), "sqlite backend opened");
        Self::from_connection(conn)
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Keys currently present, in sorted order
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key")
            .map_err(from_rusqlite)?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;
        Ok(keys)
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> voltdex_core::Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> voltdex_core::Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                rusqlite::params![key, value, now],
            )
            .map_err(from_rusqlite)?;
        tracing::debug!(key, bytes = value.len(), "sqlite entry written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> voltdex_core::Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?", [key])
            .map_err(from_rusqlite)?;
        tracing::debug!(key, removed, "sqlite entry removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.get("cars").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend.set("cars", "[]").unwrap();
        backend.set("cars", "[{\"id\":1}]").unwrap();

        assert_eq!(backend.get("cars").unwrap().as_deref(), Some("[{\"id\":1}]"));
        assert_eq!(backend.keys().unwrap(), vec!["cars".to_string()]);
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        assert!(backend.remove("cars").is_ok());
    }
}
