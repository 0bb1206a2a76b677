//! artman-config CLI
//!
//! Resolves and checks artman artifact configurations from the command line.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve { config, artifact } => commands::run_resolve(&config, &artifact),
        Commands::Check { config } => commands::run_check(&config),
        Commands::UserConfig { path } => commands::run_user_config(&path),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
///
/// `--verbose` forces debug, otherwise `RUST_LOG` decides, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Fails only when a global subscriber is already installed.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("warning: tracing subscriber not installed: {e}");
    }
    tracing::debug!("Verbose mode enabled");
}
