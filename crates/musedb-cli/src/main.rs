//! MuseDB Command-Line Interface
//!
//! Inspect, validate, export, and publish the built-in schema catalog.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MuseDB Schema Catalog CLI
#[derive(Parser, Debug)]
#[command(name = "musedb")]
#[command(version, about = "MuseDB Schema Catalog CLI")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the tables in the built-in datamodel
    Tables,

    /// Show a table's fields, relationships, indexes, and aliases
    Describe {
        /// Entity name (case-insensitive)
        table: String,
    },

    /// Run the consistency checks against the built-in datamodel
    Validate,

    /// Dump the enriched datamodel as JSON
    Export {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Publish the built-in datamodel into a catalog store
    Publish {
        /// Path to the store's data directory
        #[arg(long)]
        data_dir: PathBuf,
    },

    /// Show the current version and table count of a catalog store
    Status {
        /// Path to the store's data directory
        #[arg(long)]
        data_dir: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("musedb_cli=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Tables => commands::tables(),
        Command::Describe { table } => commands::describe(&table),
        Command::Validate => commands::validate(),
        Command::Export { pretty } => commands::export(pretty),
        Command::Publish { data_dir } => commands::publish(&data_dir),
        Command::Status { data_dir } => commands::status(&data_dir),
    }
}
