//! Durable `KvBackend` implementations

mod atomic;
mod file;
mod sqlite;

pub use file::FileBackend;
pub use sqlite::SqliteBackend;
