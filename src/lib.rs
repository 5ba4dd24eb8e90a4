//! rBankroll library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod gateway;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Guest => commands::guest::handle(cfg),
        Commands::Signup { .. }
        | Commands::Signin { .. }
        | Commands::Signout
        | Commands::Migrate { .. } => commands::account::handle(&cli.command, cfg),
        Commands::Bankroll { .. } => commands::bankroll::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Status => commands::status::handle(cfg),
        Commands::Analytics { .. } => commands::analytics::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; command line paths win over the file.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_remote) = &cli.remote_db {
        cfg.remote_database = custom_remote.clone();
    }
    log::debug!(
        "device db: {}, backend: {:?} ({})",
        cfg.database,
        cfg.backend,
        cfg.remote_database
    );

    dispatch(&cli, &cfg)
}
