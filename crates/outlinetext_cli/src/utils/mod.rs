//! CLI utility functions

use std::io::Read;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use outlinetext_core::Settings;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::cli::Cli;

pub fn create_tokio_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()
}

/// Loads settings from `--config`, else from the current directory, else defaults.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    if let Some(path) = &cli.config {
        return Settings::from_file(path).into_diagnostic();
    }

    match Settings::discover(".") {
        Some(path) => {
            debug!("Using config {}", path.display());
            Settings::from_file(&path).into_diagnostic()
        }
        None => Ok(Settings::default()),
    }
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .into_diagnostic()
            .wrap_err("Failed to read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
}
