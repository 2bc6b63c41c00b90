//! Per-table record commands

use clap::Args;
use voltdex_core::{apply, Command, CommandOutcome, TableName, VoltdexError};

use super::{print_json, CliStore};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Table key or alias (cellModels, cell-models, battery-packs, cars, ...)
    pub table: TableName,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    pub table: TableName,
    pub id: u64,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    pub table: TableName,

    /// Record fields as a JSON object; omitted fields take their defaults
    #[arg(long)]
    pub json: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub table: TableName,
    pub id: u64,

    /// Fields to change as a JSON object
    #[arg(long)]
    pub json: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub table: TableName,
    pub id: u64,
}

pub fn list(store: &mut CliStore, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    match apply(store, Command::List { table: args.table })? {
        CommandOutcome::Records(rows) => print_json(&rows),
        other => Err(unexpected(other).into()),
    }
}

pub fn get(store: &mut CliStore, args: GetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Command::Get {
        table: args.table,
        id: args.id,
    };
    match apply(store, cmd)? {
        CommandOutcome::Record(Some(row)) => print_json(&row),
        CommandOutcome::Record(None) => Err(VoltdexError::RecordNotFound {
            table: args.table,
            id: args.id,
        }
        .into()),
        other => Err(unexpected(other).into()),
    }
}

pub fn create(store: &mut CliStore, args: CreateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fields = parse_json(args.table, &args.json)?;
    match apply(
        store,
        Command::Create {
            table: args.table,
            fields,
        },
    )? {
        CommandOutcome::Record(Some(row)) => print_json(&row),
        other => Err(unexpected(other).into()),
    }
}

pub fn update(store: &mut CliStore, args: UpdateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fields = parse_json(args.table, &args.json)?;
    match apply(
        store,
        Command::Update {
            table: args.table,
            id: args.id,
            fields,
        },
    )? {
        CommandOutcome::Record(Some(row)) => print_json(&row),
        other => Err(unexpected(other).into()),
    }
}

pub fn remove(store: &mut CliStore, args: RemoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Command::Remove {
        table: args.table,
        id: args.id,
    };
    match apply(store, cmd)? {
        CommandOutcome::Removed { table, id } => {
            println!("Removed {} #{}", table, id);
            Ok(())
        }
        other => Err(unexpected(other).into()),
    }
}

fn parse_json(table: TableName, raw: &str) -> Result<serde_json::Value, VoltdexError> {
    serde_json::from_str(raw).map_err(|e| VoltdexError::InvalidInput {
        table,
        message: e.to_string(),
    })
}

fn unexpected(outcome: CommandOutcome) -> VoltdexError {
    VoltdexError::Internal {
        message: format!("unexpected command outcome: {:?}", outcome),
    }
}
