//! workhours library root.
//! Exposes the CLI parser, the high-level run() function, the hours/cost
//! calculators and the order store.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::resolve_db_path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // settings are loaded once and passed down
    let mut cfg = match cli.command {
        Commands::Config { .. } => Config::load_for_repair()?,
        _ => Config::load()?,
    };

    // same resolution as `init`: bare names live in the config dir
    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_db_path(custom_db, &Config::config_dir())
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
