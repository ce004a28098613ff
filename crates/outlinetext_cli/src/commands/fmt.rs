//! Fmt command implementation

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result, WrapErr};
use outlinetext_core::strip_trailing_whitespace;
use tracing::info;

/// Returns true in `--check` mode when any file would change.
pub fn run_fmt(files: &[PathBuf], check: bool) -> Result<bool> {
    let mut changed = Vec::new();

    for path in files {
        let content = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

        let formatted = strip_trailing_whitespace(&content);
        if formatted == content {
            continue;
        }

        if !check {
            std::fs::write(path, formatted)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!("Formatted {}", path.display());
        }
        changed.push(path);
    }

    if check {
        for path in &changed {
            println!("Would reformat: {}", path.display());
        }
        return Ok(!changed.is_empty());
    }

    Ok(false)
}
