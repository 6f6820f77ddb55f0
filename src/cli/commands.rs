//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination auto-detection for REST API responses
#[derive(Parser, Debug)]
#[command(name = "pagescout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate records and classify pagination in one pass
    Detect {
        /// JSON response body file (use `-` for stdin)
        file: PathBuf,
    },

    /// Locate the records collection only
    Records {
        /// JSON response body file (use `-` for stdin)
        file: PathBuf,
    },

    /// Classify the pagination paradigm only
    Classify {
        /// JSON response body file (use `-` for stdin)
        file: PathBuf,

        /// Records path to exclude from the scan (dotted, e.g. `_embedded.items`;
        /// digit-only segments are array indices)
        #[arg(short, long)]
        records_path: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
