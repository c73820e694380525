//! punchclock library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the `punch` binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::Cli;
use config::Config;
use errors::{AppError, AppResult};

/// Central dispatcher: reset, then punch, then views.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.clock_in && cli.clock_out {
        return Err(AppError::ConflictingFlags);
    }

    if cli.is_status_only() {
        return commands::status::handle(cfg);
    }

    if cli.reset {
        commands::reset::handle(cfg)?;
    }
    if cli.wants_punch() {
        commands::punch::handle(cli, cfg)?;
    }
    if !cli.view.is_empty() {
        commands::view::handle(cli, cfg)?;
    }

    Ok(())
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // --file / PUNCH_FILE wins over the config file
    if let Some(file) = &cli.file {
        cfg.store = file.clone();
    }

    tracing::debug!(store = %cfg.store.display(), "configuration resolved");
    dispatch(&cli, &cfg)
}
