//! Core types shared across Voltdex crates
//!
//! This crate provides the vocabulary used by the store, its backends and
//! the logging facility:
//!
//! - **Table names**: the four persisted tables and their storage keys
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
pub mod table;

pub use table::TableName;
