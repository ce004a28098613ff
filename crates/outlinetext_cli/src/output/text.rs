//! Text output formatter

use outlinetext_parser::Severity;

use super::FileReport;

pub fn output_text(reports: &[FileReport]) {
    for report in reports {
        for diag in &report.diagnostics {
            let severity = match diag.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            // 1-based positions, as editors and compilers print them
            println!(
                "{}:{}:{} {} [{}]: {}",
                report.path.display(),
                diag.line + 1,
                diag.column + 1,
                severity,
                diag.code.as_deref().unwrap_or("-"),
                diag.message
            );
        }
    }

    let total_issues: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    println!(
        "Checked {} files, found {} issues",
        reports.len(),
        total_issues
    );
}
