//! CLI entry point for the PDB dataset bootstrap tool.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pdb_bootstrap::DataPaths;
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Cli::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Diagnostics go to stderr; stdout is reserved for operator output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let quiet = args.quiet;
    match args.command {
        Command::Hello { name } => {
            commands::run_hello(&name);
            Ok(())
        }
        Command::FetchIds { output } => commands::run_fetch_ids(&output, quiet).await,
        Command::Assemblies { input_file, limit } => {
            let paths = resolve_paths(args.data_dir)?;
            commands::run_assemblies(&paths, &input_file, limit as usize, quiet).await
        }
        Command::Ccd => {
            let paths = resolve_paths(args.data_dir)?;
            commands::run_ccd(&paths, quiet).await
        }
    }
}

fn resolve_paths(data_dir: Option<PathBuf>) -> Result<DataPaths> {
    match data_dir {
        Some(dir) => Ok(DataPaths::new(dir)),
        None => DataPaths::discover()
            .context("locating project root (add a .project-root marker or pass --data-dir)"),
    }
}
