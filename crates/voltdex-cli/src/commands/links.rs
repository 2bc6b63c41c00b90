//! Link traversal commands

use clap::{Args, Subcommand};
use voltdex_core::queries::{cars_for_pack, packs_for_car, packs_using_cell_model};

use super::{print_json, CliStore};

#[derive(Debug, Args)]
pub struct LinksArgs {
    #[command(subcommand)]
    pub command: LinksCommand,
}

#[derive(Debug, Subcommand)]
pub enum LinksCommand {
    /// Battery packs fitted to a car
    Car { id: u64 },
    /// Cars fitted with a battery pack
    Pack { id: u64 },
    /// Battery packs built from a cell model
    Cell { id: u64 },
}

pub fn execute(store: &CliStore, args: LinksArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        LinksCommand::Car { id } => print_json(&packs_for_car(store, id)?),
        LinksCommand::Pack { id } => print_json(&cars_for_pack(store, id)?),
        LinksCommand::Cell { id } => print_json(&packs_using_cell_model(store, id)?),
    }
}
