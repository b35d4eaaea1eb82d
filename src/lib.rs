//! farmsheets library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (domain logic, persistence, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::User { .. } => commands::user::handle(&cli.command, cfg),
        Commands::Location { .. } => commands::location::handle(&cli.command, cfg),
        Commands::Submit { .. } => commands::submit::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Review { .. } => commands::review::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Pending { .. } => commands::pending::handle(&cli.command, cfg),
        Commands::Summary { .. } => commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to every command
    let mut cfg = Config::load()?;

    // same resolution as `init`, so a relative --db finds the file it created
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(user) = &cli.acting {
        cfg.current_user = Some(user.clone());
    }

    dispatch(&cli, &cfg)
}
