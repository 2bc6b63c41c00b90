//! Error handling for voltdex-store
//!
//! Backend failures are built as voltdex-core `ExError`s through the helpers
//! below and cross the `KvBackend` boundary as persistence errors.

use thiserror::Error;
use voltdex_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Reasons a backend location cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid entry key {key:?}: only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidKey { key: String },

    #[error("{path} exists and is not a directory")]
    NotADirectory { path: String },
}

impl From<StoreError> for ExError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidKey { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("file_key")
                .with_message(err.to_string()),
            StoreError::NotADirectory { .. } => ExError::new(ExErrorKind::Io)
                .with_op("file_open")
                .with_message(err.to_string()),
        }
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
