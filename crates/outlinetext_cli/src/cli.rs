//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// OutlineText - convert, check and format OutlineText documents
#[derive(Parser)]
#[command(name = "otx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a document to HTML
    Parse {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ParseFormat::Html)]
        format: ParseFormat,
    },

    /// Report advisory diagnostics
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Remove trailing whitespace
    Fmt {
        /// Files to format in place
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report files that would change without writing them
        #[arg(long)]
        check: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Start the LSP server
    Lsp,
}

/// Output of the `parse` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseFormat {
    /// The rendered HTML only
    Html,
    /// The full parse result
    Json,
}

/// Output of the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
