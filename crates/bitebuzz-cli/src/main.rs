//! Bite Buzz CLI
//!
//! Command-line front end for the Bite Buzz food catalog.

use std::path::PathBuf;

use anyhow::Context;
use bitebuzz::store::SqliteStore;
use bitebuzz::Catalog;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;
mod render;

use config::AppConfig;
use logging::LogProfile;

#[derive(Debug, Parser)]
#[command(name = "bitebuzz")]
#[command(about = "Bite Buzz - browse and add food items", long_about = None)]
struct Cli {
    /// SQLite database file (overrides the config file)
    #[arg(long, global = true, env = "BITEBUZZ_DB")]
    db: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, env = "BITEBUZZ_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List food items, filtered and sorted
    List(commands::list::ListArgs),
    /// Add a new food item
    AddItem(commands::add_item::AddItemArgs),
    /// Register a category
    AddCategory(commands::categories::AddCategoryArgs),
    /// Show registered categories
    Categories,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.database = db;
    }
    if cli.log_json {
        config.log = LogProfile::Json;
    }
    logging::init(config.log);

    let store = SqliteStore::open(&config.database)
        .with_context(|| format!("opening database {}", config.database.display()))?;
    let catalog = Catalog::open(store, config.catalog.clone()).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List(args) => commands::list::execute(args, &catalog, &mut out).await,
        Commands::AddItem(args) => commands::add_item::execute(args, &catalog, &mut out).await,
        Commands::AddCategory(args) => {
            commands::categories::execute_add(args, &catalog, &mut out).await
        }
        Commands::Categories => commands::categories::execute_list(&catalog, &mut out).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
