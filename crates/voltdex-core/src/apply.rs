//! Functional-boundary apply function
//!
//! `apply()` is the single entry point that turns a [`Command`] into store
//! calls. Input objects are deserialized into the target table's typed
//! create/patch shape before the store sees them, so malformed input never
//! reaches persistence.
//!
//! ```
//! use voltdex_core::{apply, Command, MemoryBackend, Store, TableName};
//!
//! let mut store = Store::new(MemoryBackend::new());
//! let cmd = Command::Create {
//!     table: TableName::Cars,
//!     fields: serde_json::json!({"brand": "Tesla", "model": "Model Y"}),
//! };
//! apply(&mut store, cmd).unwrap();
//! ```

use serde_json::Value;
use voltdex_core_types::TableName;

use crate::backend::KvBackend;
use crate::commands::{Command, CommandOutcome};
use crate::errors::{Result, VoltdexError};
use crate::model::{BatteryPack, Car, CarBatteryPack, CellModel, Record};
use crate::ops::Store;

enum TableOp {
    List,
    Get(u64),
    Create(Value),
    Update(u64, Value),
    Remove(u64),
}

/// Apply a command to a store
///
/// # Errors
///
/// * `InvalidInput` - `fields` does not match the table's input shape
/// * any error of the underlying store operation
pub fn apply<B: KvBackend>(store: &mut Store<B>, cmd: Command) -> Result<CommandOutcome> {
    match cmd {
        Command::List { table } => dispatch(store, table, TableOp::List),
        Command::Get { table, id } => dispatch(store, table, TableOp::Get(id)),
        Command::Create { table, fields } => dispatch(store, table, TableOp::Create(fields)),
        Command::Update { table, id, fields } => {
            dispatch(store, table, TableOp::Update(id, fields))
        }
        Command::Remove { table, id } => dispatch(store, table, TableOp::Remove(id)),
        Command::Export => Ok(CommandOutcome::Export(store.export()?)),
        Command::Import { export } => {
            store.import(export)?;
            Ok(CommandOutcome::Imported)
        }
        Command::Reset => {
            store.reset()?;
            Ok(CommandOutcome::Reset)
        }
        Command::CheckIntegrity => Ok(CommandOutcome::Integrity(store.check_integrity()?)),
    }
}

fn dispatch<B: KvBackend>(
    store: &mut Store<B>,
    table: TableName,
    op: TableOp,
) -> Result<CommandOutcome> {
    match table {
        TableName::CellModels => run::<CellModel, B>(store, op),
        TableName::BatteryPacks => run::<BatteryPack, B>(store, op),
        TableName::Cars => run::<Car, B>(store, op),
        TableName::CarBatteryPacks => run::<CarBatteryPack, B>(store, op),
    }
}

fn run<R: Record, B: KvBackend>(store: &mut Store<B>, op: TableOp) -> Result<CommandOutcome> {
    match op {
        TableOp::List => {
            let rows = store
                .list::<R>()?
                .iter()
                .map(serde_json::to_value)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(CommandOutcome::Records(rows))
        }
        TableOp::Get(id) => {
            let row = store
                .get::<R>(id)?
                .map(|r| serde_json::to_value(&r))
                .transpose()?;
            Ok(CommandOutcome::Record(row))
        }
        TableOp::Create(fields) => {
            let new = parse_fields::<R, R::New>(fields)?;
            let created = store.create::<R>(new)?;
            Ok(CommandOutcome::Record(Some(serde_json::to_value(&created)?)))
        }
        TableOp::Update(id, fields) => {
            let patch = parse_fields::<R, R::Patch>(fields)?;
            let updated = store.update::<R>(id, patch)?;
            Ok(CommandOutcome::Record(Some(serde_json::to_value(&updated)?)))
        }
        TableOp::Remove(id) => {
            store.remove::<R>(id)?;
            Ok(CommandOutcome::Removed {
                table: R::TABLE,
                id,
            })
        }
    }
}

fn parse_fields<R: Record, T: serde::de::DeserializeOwned>(fields: Value) -> Result<T> {
    if !fields.is_object() {
        return Err(VoltdexError::InvalidInput {
            table: R::TABLE,
            message: "expected a JSON object".to_string(),
        });
    }
    serde_json::from_value(fields).map_err(|e| VoltdexError::InvalidInput {
        table: R::TABLE,
        message: e.to_string(),
    })
}
