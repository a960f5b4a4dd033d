//! Gensrc CLI - resolves build-target source lists from .sources files

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("gensrc=debug")
    } else {
        EnvFilter::new("gensrc=info")
    };

    // Logs share stderr with diagnostics; stdout carries only the
    // resolved file list.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Expand(args) => commands::expand::execute(args),
        Commands::Targets(args) => commands::targets::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
