//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the
//! attendance engine with its loaders and writers.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    let config_path = Config::resolve_path(cli.config.as_deref());

    match &cli.command {
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, &config_path),
        _ => {
            let cfg = Config::load(&config_path)?;
            cli::commands::report::handle(cli.command.as_ref(), &cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);
    dispatch(&cli)
}
