//! Extension Inventory CLI
//!
//! Writes a listing and a cleanup analysis for the editor's installed
//! extensions.

mod cli;
mod commands;
mod error;
mod failure;

use std::path::Path;

use chrono::Local;
use clap::Parser;
use extinv_core::InventoryConfig;

use cli::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = extinv_core::logging::init(cli.verbose) {
        eprintln!("warning: could not initialize logging: {e}");
    }

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            // No usable config, so the error log goes to the default location
            let fallback = InventoryConfig::default().resolve_paths(&cli.output_dir);
            fail(&e, &fallback.error_log)
        }
    };

    let paths = config.resolve_paths(&cli.output_dir);
    let generated_at = Local::now().naive_local();

    match commands::run_report(&config, &paths, generated_at) {
        Ok(summary) => {
            tracing::debug!(?summary, "report finished");
        }
        Err(e) => fail(&e, &paths.error_log),
    }
}

fn fail(err: &CliError, error_log: &Path) -> ! {
    failure::report(err, error_log);
    std::process::exit(1);
}
