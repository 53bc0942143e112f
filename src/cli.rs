//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pdb_bootstrap::download::DEFAULT_CONCURRENCY;

/// Bootstrap a local RCSB PDB dataset.
///
/// Queries the RCSB Search API for entry identifiers and downloads
/// biological assembly files and the Chemical Component Dictionary into
/// the project data tree.
#[derive(Parser, Debug)]
#[command(name = "pdb-bootstrap")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project data root (defaults to the nearest ancestor directory
    /// containing a `.project-root` marker)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a greeting (CLI smoke test)
    Hello {
        /// The name to greet
        #[arg(long, default_value = "User")]
        name: String,
    },

    /// Query the RCSB Search API for matching entry identifiers
    FetchIds {
        /// Where to write the identifier list, one per line
        #[arg(short, long, default_value = "pdb_ids.txt")]
        output: PathBuf,
    },

    /// Batch-download biological assembly files for a list of entry IDs
    Assemblies {
        /// Path to the text file containing PDB IDs, one per line
        #[arg(short = 'f', long)]
        input_file: PathBuf,

        /// Maximum number of concurrent downloads
        #[arg(
            short = 'l',
            long,
            default_value_t = DEFAULT_CONCURRENCY as u32,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        limit: u32,
    },

    /// Download the full Chemical Component Dictionary
    Ccd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_hello_defaults_to_user() {
        let cli = Cli::try_parse_from(["pdb-bootstrap", "hello"]).unwrap();
        match cli.command {
            Command::Hello { name } => assert_eq!(name, "User"),
            other => panic!("expected hello, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_hello_accepts_name() {
        let cli = Cli::try_parse_from(["pdb-bootstrap", "hello", "--name", "Rosalind"]).unwrap();
        match cli.command {
            Command::Hello { name } => assert_eq!(name, "Rosalind"),
            other => panic!("expected hello, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_assemblies_requires_input_file() {
        let result = Cli::try_parse_from(["pdb-bootstrap", "assemblies"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_assemblies_default_limit() {
        let cli =
            Cli::try_parse_from(["pdb-bootstrap", "assemblies", "-f", "pdb_ids.txt"]).unwrap();
        match cli.command {
            Command::Assemblies { input_file, limit } => {
                assert_eq!(input_file, PathBuf::from("pdb_ids.txt"));
                assert_eq!(limit, 100);
            }
            other => panic!("expected assemblies, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_assemblies_short_flags() {
        let cli = Cli::try_parse_from([
            "pdb-bootstrap",
            "assemblies",
            "-f",
            "ids.txt",
            "-l",
            "8",
        ])
        .unwrap();
        match cli.command {
            Command::Assemblies { limit, .. } => assert_eq!(limit, 8),
            other => panic!("expected assemblies, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_assemblies_rejects_zero_limit() {
        let result = Cli::try_parse_from([
            "pdb-bootstrap",
            "assemblies",
            "-f",
            "ids.txt",
            "--limit",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_fetch_ids_default_output() {
        let cli = Cli::try_parse_from(["pdb-bootstrap", "fetch-ids"]).unwrap();
        match cli.command {
            Command::FetchIds { output } => assert_eq!(output, PathBuf::from("pdb_ids.txt")),
            other => panic!("expected fetch-ids, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pdb-bootstrap", "ccd", "-v", "--data-dir", "/tmp/data"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        assert!(matches!(cli.command, Command::Ccd));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["pdb-bootstrap"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Cli::try_parse_from(["pdb-bootstrap", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
