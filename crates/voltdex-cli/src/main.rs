//! Voltdex CLI
//!
//! Command-line interface for the battery cell, pack and vehicle store

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use voltdex_core::logging_facility::{self, Profile};
use voltdex_core::{KvBackend, Store};
use voltdex_store::{FileBackend, SqliteBackend};

mod commands;

use commands::CliStore;

#[derive(Debug, Parser)]
#[command(name = "voltdex")]
#[command(about = "Voltdex - EV battery cells, packs and vehicles", long_about = None)]
struct Cli {
    #[command(flatten)]
    backend: BackendArgs,

    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Off)]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
pub struct BackendArgs {
    /// SQLite database file
    #[arg(long, global = true, default_value = ".voltdex/store.db")]
    pub db: PathBuf,

    /// Directory of JSON files, one per table (instead of --db)
    #[arg(long, global = true, conflicts_with = "db")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Dev,
    Json,
    Off,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every record of a table
    List(commands::records::ListArgs),
    /// Show one record
    Get(commands::records::GetArgs),
    /// Insert a record from a JSON object
    Create(commands::records::CreateArgs),
    /// Change the supplied fields of a record; null clears a field
    Update(commands::records::UpdateArgs),
    /// Delete a record that nothing references
    Remove(commands::records::RemoveArgs),
    /// Print or save a snapshot of every table
    Export(commands::data::ExportArgs),
    /// Replace every table with a snapshot file
    Import(commands::data::ImportArgs),
    /// Restore the built-in dataset
    Reset,
    /// Report duplicate ids and dangling foreign keys
    Check,
    /// Follow links between cars, packs and cell models
    Links(commands::links::LinksArgs),
}

fn open_store(args: &BackendArgs) -> Result<CliStore, Box<dyn std::error::Error>> {
    let backend: Box<dyn KvBackend> = match &args.dir {
        Some(dir) => Box::new(FileBackend::open(dir)?),
        None => Box::new(SqliteBackend::open(&args.db)?),
    };
    Ok(Store::open(backend)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(&cli.backend)?;

    match cli.command {
        Commands::List(args) => commands::records::list(&mut store, args),
        Commands::Get(args) => commands::records::get(&mut store, args),
        Commands::Create(args) => commands::records::create(&mut store, args),
        Commands::Update(args) => commands::records::update(&mut store, args),
        Commands::Remove(args) => commands::records::remove(&mut store, args),
        Commands::Export(args) => commands::data::export(&mut store, args),
        Commands::Import(args) => commands::data::import(&mut store, args),
        Commands::Reset => commands::data::reset(&mut store),
        Commands::Check => commands::data::check(&mut store),
        Commands::Links(args) => commands::links::execute(&store, args),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogFormat::Dev => logging_facility::init(Profile::Development),
        LogFormat::Json => logging_facility::init(Profile::Production),
        LogFormat::Off => {}
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
