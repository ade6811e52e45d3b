//! shotlog library root.
//! Exposes the CLI parser, the high-level run() function and the scan pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod report;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Scan { .. } => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::scan::handle(&cli.command, &cfg)
        }
        Commands::Export { .. } => {
            let cfg = Config::load_from(config_path)?;
            cli::commands::export::handle(&cli.command, &cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref());
    tracing::debug!(config = %config_path.display(), "using configuration file");

    dispatch(&cli, &config_path)
}
