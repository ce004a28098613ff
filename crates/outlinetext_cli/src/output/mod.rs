//! Output formatting module

mod json;
mod text;

use std::path::PathBuf;

use miette::Result;
use outlinetext_parser::Diagnostic;

use crate::cli::ReportFormat;

/// Diagnostics found in one file.
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Prints the reports and returns true if any diagnostic was found.
pub fn output_reports(reports: &[FileReport], format: ReportFormat) -> Result<bool> {
    let has_issues = reports.iter().any(|r| !r.diagnostics.is_empty());

    match format {
        ReportFormat::Json => json::output_json(reports)?,
        ReportFormat::Text => text::output_text(reports),
    }

    Ok(has_issues)
}
