//! pomhelper - Main Entry Point
//!
//! Parses the command line, installs logging and dispatches to the
//! subcommand implementations.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const DEFAULT_FILTER: &str = "pomhelper=info,pomhelper_application=info";
const VERBOSE_FILTER: &str =
    "pomhelper=debug,pomhelper_application=debug,pomhelper_infrastructure=debug";

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so `show --json` stays clean
    let default_filter = if cli.verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
