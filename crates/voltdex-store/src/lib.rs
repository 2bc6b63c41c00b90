//! Voltdex Store - durable backends for the relational store
//!
//! Provides:
//! - `SqliteBackend`: one row per table entry, schema managed by embedded
//!   migrations with checksums
//! - `FileBackend`: one JSON file per table entry, written atomically

pub mod backend;
pub mod db;
pub mod errors;
pub mod migrations;

// Re-export key types
pub use backend::{FileBackend, SqliteBackend};
pub use errors::{Result, StoreError};
