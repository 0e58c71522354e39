//! lightbnb CLI - LightBnB data access from the command line
//!
//! - Property search with optional filters (`properties`)
//! - User lookup by email or id (`user`)
//! - Past reservations for a guest (`reservations`)
//! - Inserts (`add-user`, `add-property`)
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::StoreConfig;

mod commands;
mod env;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Search LightBnB listings and look up users and reservations"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (overrides ~/.lightbnb/config.toml and ./lightbnb.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// PostgreSQL connection string (overrides config and DATABASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search properties, cheapest first
    Properties(commands::PropertiesArgs),
    /// Look up a user by email or id
    User(commands::UserArgs),
    /// List a guest's past reservations
    Reservations(commands::ReservationsArgs),
    /// Add a user
    AddUser(commands::AddUserArgs),
    /// Add a property from a JSON file
    AddProperty(commands::AddPropertyArgs),
}

fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = StoreConfig::from_path(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        }
        None => StoreConfig::load()?,
    };

    if let Some(url) = &cli.database_url {
        config.database_url = url.clone();
    }

    config.validate().context("Invalid configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug })?;
    env::load_dotenv();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Properties(args) => commands::run_properties(args, &config).await,
        Commands::User(args) => commands::run_user(args, &config).await,
        Commands::Reservations(args) => commands::run_reservations(args, &config).await,
        Commands::AddUser(args) => commands::run_add_user(args, &config).await,
        Commands::AddProperty(args) => commands::run_add_property(args, &config).await,
    }
}
