//! Grocereasy CLI - Record grocery prices and list what you have bought.
//!
//! # Usage
//!
//! ```bash
//! # Create the ledger (safe to repeat)
//! grocereasy init
//!
//! # Record a purchase (date defaults to today)
//! grocereasy add --product apples --volume 2 --unit kg --price 1.99 --store auchan
//!
//! # Show previously bought products, without duplicates
//! grocereasy products
//!
//! # Show every entry, oldest first
//! grocereasy entries --json
//! ```
//!
//! # Commands
//!
//! - `init` - Create the database file and schema
//! - `add` - Validate and store a purchase
//! - `products` - List distinct product names
//! - `entries` - List all stored entries
//!
//! # Environment Variables
//!
//! - `GROCEREASY_DATABASE_PATH` - SQLite file (default: `Groceries.db`); `--database` overrides it
//! - `RUST_LOG` - Log filter (default: `grocereasy_cli=info,grocereasy_ledger=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grocereasy_core::RawEntry;
use grocereasy_ledger::LedgerConfig;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "grocereasy")]
#[command(author, version, about = "Grocery price ledger")]
struct Cli {
    /// Path to the SQLite database (overrides `GROCEREASY_DATABASE_PATH`)
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger database if it does not exist
    Init,
    /// Record a purchase
    Add {
        /// Product name (e.g. apples)
        #[arg(short, long)]
        product: String,

        /// Unit volume as a whole number (e.g. 2)
        #[arg(short, long)]
        volume: String,

        /// Unit: kg, g, mg, l, ml, or piece for whole items
        #[arg(short, long)]
        unit: String,

        /// Price paid (e.g. 1.99)
        #[arg(long)]
        price: f64,

        /// Store name (e.g. auchan, pingodoce)
        #[arg(short, long)]
        store: String,

        /// Date as DD:MM:YYYY (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List previously bought products without duplicates
    Products,
    /// List every stored entry, oldest first
    Entries {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grocereasy_cli=info,grocereasy_ledger=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.log_json);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = LedgerConfig::from_env()?;
    if let Some(path) = cli.database {
        config = config.with_database_path(path);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Init => commands::init::run(&config, &mut out).await?,
        Commands::Add {
            product,
            volume,
            unit,
            price,
            store,
            date,
        } => {
            let raw = RawEntry {
                product_name: product,
                unit_volume: volume,
                unit,
                price,
                store_name: store,
                date_entered: date,
            };
            commands::add::run(&config, &raw, &mut out).await?;
        }
        Commands::Products => commands::products::run(&config, &mut out).await?,
        Commands::Entries { json } => commands::entries::run(&config, json, &mut out).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_global_database() {
        let cli = Cli::try_parse_from([
            "grocereasy",
            "--database",
            "test.db",
            "add",
            "-p",
            "apples",
            "-v",
            "2",
            "-u",
            "kg",
            "--price",
            "1.99",
            "-s",
            "auchan",
        ])
        .unwrap_or_else(|e| panic!("parse failed: {e}"));

        assert_eq!(cli.database, Some(PathBuf::from("test.db")));
        assert!(matches!(
            cli.command,
            Commands::Add { ref product, date: None, .. } if product == "apples"
        ));
    }

    #[test]
    fn test_parse_entries_json() {
        let cli = Cli::try_parse_from(["grocereasy", "entries", "--json"])
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert!(matches!(cli.command, Commands::Entries { json: true }));
    }
}
