//! Command inventory for the store's functional boundary
//!
//! Every CRUD and utility operation as data, so a front end can build a
//! command from loosely-typed input and hand it to [`crate::apply::apply`].

use serde_json::Value;
use voltdex_core_types::TableName;

use crate::ops::Export;
use crate::rules::IntegrityViolation;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List { table: TableName },
    Get { table: TableName, id: u64 },
    /// `fields` is a JSON object in the table's create-input shape
    Create { table: TableName, fields: Value },
    /// `fields` is a JSON object; only keys present are applied
    Update { table: TableName, id: u64, fields: Value },
    Remove { table: TableName, id: u64 },
    Export,
    Import { export: Export },
    Reset,
    CheckIntegrity,
}

/// Result of applying a [`Command`]; records are returned in serialized form
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Records(Vec<Value>),
    /// `None` when `Get` found no row
    Record(Option<Value>),
    Removed { table: TableName, id: u64 },
    Export(Export),
    Imported,
    Reset,
    Integrity(Vec<IntegrityViolation>),
}
