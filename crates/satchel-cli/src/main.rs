//! Satchel CLI - inspect uploaded ZIP archives and bundle files into new
//! ones.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "SATCHEL_LOG";

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);
    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Info(args) => commands::info::execute(args, &*formatter),
        cli::Commands::Bundle(args) => {
            commands::bundle::execute(args, &*formatter, cli.quiet || cli.json)
        }
        cli::Commands::Sniff(args) => commands::sniff::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
