//! Prepkit CLI - command-line front end for prepkit-core.
//!
//! Each subcommand feeds its arguments to one preprocessing operation and
//! prints a single result line on stdout. Logs go to stderr.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use prepkit_core::{OutputConfig, PrepError};
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<PrepError>()
                .map(PrepError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let outcome = commands::execute(&cli.group)?;
    debug!(label = outcome.label, "Command finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_outcome(&outcome, cli.format, &mut out).context("Failed to write result")?;
    Ok(())
}

/// Set up logging on stderr so stdout carries only results.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(OutputConfig::DEFAULT_LOG_FILTER))
    };

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}
