use thiserror::Error;
use voltdex_core_types::TableName;

/// Result type alias using VoltdexError
pub type Result<T> = std::result::Result<T, VoltdexError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, tests, any
/// future presentation layer) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Caller input
    /// A supplied foreign key does not resolve, or an import is inconsistent
    Validation,
    /// The operation targets an identifier that does not exist
    NotFound,
    /// A delete is blocked by a dependent record in another table
    Conflict,
    /// Input could not be interpreted (unknown table, malformed JSON)
    InvalidInput,

    // Storage
    /// Stored state disagrees with what the store expects (e.g. migration checksums)
    ConstraintViolation,
    Serialization,
    Persistence,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Conflict => "ERR_CONFLICT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<TableName>,
    record_id: Option<u64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            record_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: TableName) -> Self {
        self.table = Some(table);
        self
    }

    /// Add record id context
    pub fn with_record_id(mut self, id: u64) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<TableName> {
        self.table
    }

    pub fn record_id(&self) -> Option<u64> {
        self.record_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(id) = self.record_id {
            write!(f, " (record_id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoltdexError {
    // ===== Validation =====
    /// A foreign key names a record that does not exist in its target table
    #[error("Invalid {field}: {id}")]
    InvalidReference {
        table: TableName,
        field: &'static str,
        id: u64,
    },

    /// The table's highest id is `u64::MAX`, so no next id exists
    #[error("No identifier left in {table}: highest id is {max_id}")]
    IdsExhausted { table: TableName, max_id: u64 },

    /// An imported snapshot is internally inconsistent
    #[error("Invalid import: {reason}")]
    InvalidImport { reason: String },

    // ===== Lookup =====
    #[error("Record not found: {table} #{id}")]
    RecordNotFound { table: TableName, id: u64 },

    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    /// Caller-supplied fields could not be read as the table's input shape
    #[error("Invalid input for {table}: {message}")]
    InvalidInput { table: TableName, message: String },

    // ===== Conflict =====
    /// Delete refused because another table still references the record
    #[error("Cannot delete {table} #{id}: referenced by {dependent_table} #{dependent_id}")]
    DeleteBlocked {
        table: TableName,
        id: u64,
        dependent_table: TableName,
        dependent_id: u64,
    },

    // ===== Storage =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<VoltdexError> for ExError {
    fn from(err: VoltdexError) -> Self {
        let message = err.to_string();
        match err {
            VoltdexError::InvalidReference { table, id, .. } => {
                ExError::new(ExErrorKind::Validation)
                    .with_table(table)
                    .with_record_id(id)
                    .with_message(message)
            }

            VoltdexError::IdsExhausted { table, .. } => ExError::new(ExErrorKind::Validation)
                .with_op("create")
                .with_table(table)
                .with_message(message),

            VoltdexError::InvalidImport { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("import")
                .with_message(message),

            VoltdexError::RecordNotFound { table, id } => ExError::new(ExErrorKind::NotFound)
                .with_table(table)
                .with_record_id(id)
                .with_message(message),

            VoltdexError::UnknownTable { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            VoltdexError::InvalidInput { table, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_table(table)
                .with_message(message),

            VoltdexError::DeleteBlocked { table, id, .. } => ExError::new(ExErrorKind::Conflict)
                .with_op("remove")
                .with_table(table)
                .with_record_id(id)
                .with_message(message),

            VoltdexError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            VoltdexError::Persistence { .. } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }

            VoltdexError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Backend failures surface to store callers as persistence errors
impl From<ExError> for VoltdexError {
    fn from(err: ExError) -> Self {
        VoltdexError::Persistence {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VoltdexError {
    fn from(err: serde_json::Error) -> Self {
        VoltdexError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<voltdex_core_types::table::UnknownTableName> for VoltdexError {
    fn from(err: voltdex_core_types::table::UnknownTableName) -> Self {
        VoltdexError::UnknownTable { name: err.0 }
    }
}

impl VoltdexError {
    /// Classification of this error in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        ExError::from(self.clone()).kind()
    }
}
