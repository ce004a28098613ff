//! OutlineText CLI
//!
//! Renders, checks and formats OutlineText documents, and hosts the
//! language server.

mod cli;
mod commands;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{run_check, run_fmt, run_init, run_lsp, run_parse};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for HTML, JSON and LSP traffic
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_issues) => {
            if has_issues {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Parse { file, format } => run_parse(&cli, file, *format),
        Commands::Check { files, format } => run_check(&cli, files, *format),
        Commands::Fmt { files, check } => run_fmt(files, *check),
        Commands::Init { force } => {
            run_init(*force)?;
            Ok(false)
        }
        Commands::Lsp => {
            run_lsp()?;
            Ok(false)
        }
    }
}
