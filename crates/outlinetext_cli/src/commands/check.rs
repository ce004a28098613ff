//! Check command implementation

use std::path::PathBuf;

use miette::Result;
use outlinetext_core::ParseService;
use tracing::debug;

use crate::cli::{Cli, ReportFormat};
use crate::output::{FileReport, output_reports};
use crate::utils::{load_settings, read_input};

pub fn run_check(cli: &Cli, files: &[PathBuf], format: ReportFormat) -> Result<bool> {
    let service = ParseService::new(load_settings(cli)?);

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let content = read_input(path)?;
        let diagnostics = service.validate(&content);
        debug!("{}: {} diagnostics", path.display(), diagnostics.len());
        reports.push(FileReport {
            path: path.clone(),
            diagnostics,
        });
    }

    output_reports(&reports, format)
}
