//! Whole-dataset commands: export, import, reset, check

use std::path::PathBuf;

use clap::Args;
use voltdex_core::{apply, Command, CommandOutcome, Export, TableName, VoltdexError};

use super::{print_json, CliStore};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write the snapshot to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snapshot file as written by `export`
    pub file: PathBuf,
}

pub fn export(store: &mut CliStore, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let CommandOutcome::Export(snapshot) = apply(store, Command::Export)? else {
        return Err("export returned no snapshot".into());
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
            println!("Exported to {}", path.display());
            print_counts(&snapshot);
            Ok(())
        }
        None => print_json(&snapshot),
    }
}

pub fn import(store: &mut CliStore, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&args.file)?;
    let snapshot: Export = serde_json::from_str(&raw).map_err(|e| VoltdexError::InvalidImport {
        reason: e.to_string(),
    })?;

    apply(
        store,
        Command::Import {
            export: snapshot.clone(),
        },
    )?;
    println!("Imported {}", args.file.display());
    print_counts(&snapshot);
    Ok(())
}

pub fn reset(store: &mut CliStore) -> Result<(), Box<dyn std::error::Error>> {
    apply(store, Command::Reset)?;
    println!("Store reset to built-in dataset");
    print_counts(&store.export()?);
    Ok(())
}

pub fn check(store: &mut CliStore) -> Result<(), Box<dyn std::error::Error>> {
    let CommandOutcome::Integrity(violations) = apply(store, Command::CheckIntegrity)? else {
        return Err("integrity check returned no report".into());
    };

    if violations.is_empty() {
        println!("OK: no integrity violations");
        return Ok(());
    }

    for violation in &violations {
        println!("{}", violation);
    }
    Err(format!("{} integrity violation(s)", violations.len()).into())
}

fn print_counts(snapshot: &Export) {
    for table in TableName::ALL {
        println!("  {}: {}", table, snapshot.row_count(table));
    }
}
