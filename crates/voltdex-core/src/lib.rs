//! Voltdex Core - relational store for battery cells, packs and vehicles
//!
//! This crate provides:
//! - Domain models for the four tables, with explicit-presence patches
//! - A `Store` over any `KvBackend`, with auto-increment ids, foreign-key
//!   validation on write and referential-integrity guards on delete
//! - The built-in seed dataset, export/import/reset and integrity checks
//! - Join queries over the car/pack junction table
//! - Structured error and logging facilities

pub mod apply;
pub mod backend;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;
pub mod seed;

// Used by the exported logging macros
pub use voltdex_core_types;

// Re-export commonly used types
pub use apply::apply;
pub use backend::{KvBackend, MemoryBackend};
pub use commands::{Command, CommandOutcome};
pub use errors::{ExError, ExErrorKind, Result, VoltdexError};
pub use model::{BatteryPack, Car, CarBatteryPack, CellModel, Patch, Record};
pub use ops::{Export, Store};
pub use rules::IntegrityViolation;
pub use voltdex_core_types::TableName;
