//! Advisory checks over raw document lines.
//!
//! These run independently of block dispatch and never prevent HTML output.

use crate::{Diagnostic, Severity};

/// Code reported for a line whose `[` and `]` counts differ.
pub const UNMATCHED_BRACKETS: &str = "unmatched-brackets";

/// Code reported when a document exceeds the configured size limit.
pub const DOCUMENT_TOO_LARGE: &str = "document-too-large";

/// Reports one warning at column 0 for every line with unbalanced square brackets.
pub fn check_brackets<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Diagnostic> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| {
            let open = line.bytes().filter(|&b| b == b'[').count();
            let close = line.bytes().filter(|&b| b == b']').count();
            open != close
        })
        .map(|(index, _)| {
            Diagnostic::new(index, 0, "Unmatched brackets detected")
                .with_severity(Severity::Warning)
                .with_code(UNMATCHED_BRACKETS)
        })
        .collect()
}

/// Reports a warning at line 0 when `content` is longer than `max_bytes`.
pub fn check_document_size(content: &str, max_bytes: usize) -> Option<Diagnostic> {
    (content.len() > max_bytes).then(|| {
        Diagnostic::new(0, 0, "Document is too large for real-time parsing")
            .with_severity(Severity::Warning)
            .with_code(DOCUMENT_TOO_LARGE)
    })
}
