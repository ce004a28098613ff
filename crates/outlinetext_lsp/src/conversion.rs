//! LSP type conversion utilities.

use outlinetext_core::{TrimEdit, split_editor_lines};
use outlinetext_parser::checks::DOCUMENT_TOO_LARGE;
use outlinetext_parser::{Diagnostic as OutlineDiagnostic, Severity};
use tower_lsp::lsp_types::{
    Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range, TextEdit,
};

/// Source reported on every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "outlinetext";

/// Converts an OutlineText diagnostic to an LSP diagnostic.
///
/// Line diagnostics span from their column to the end of the line. The
/// document size warning is zero-width.
pub fn to_lsp_diagnostic(diag: &OutlineDiagnostic, lines: &[&str]) -> Diagnostic {
    let line = lines.get(diag.line).copied().unwrap_or_default();
    let start = Position::new(diag.line as u32, byte_to_utf16(line, diag.column));
    let end = if diag.code.as_deref() == Some(DOCUMENT_TOO_LARGE) {
        start
    } else {
        Position::new(diag.line as u32, utf16_len(line))
    };

    let severity = match diag.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Info => DiagnosticSeverity::INFORMATION,
    };

    Diagnostic {
        range: Range::new(start, end),
        severity: Some(severity),
        code: diag.code.clone().map(NumberOrString::String),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diag.message.clone(),
        ..Default::default()
    }
}

/// Converts all diagnostics for `text`.
pub fn to_lsp_diagnostics(diagnostics: &[OutlineDiagnostic], text: &str) -> Vec<Diagnostic> {
    let lines = split_editor_lines(text);
    diagnostics
        .iter()
        .map(|diag| to_lsp_diagnostic(diag, &lines))
        .collect()
}

/// Converts a trailing-whitespace deletion into an LSP edit.
pub fn to_text_edit(edit: &TrimEdit, lines: &[&str]) -> TextEdit {
    let line = lines.get(edit.line).copied().unwrap_or_default();
    let row = edit.line as u32;
    TextEdit {
        range: Range::new(
            Position::new(row, byte_to_utf16(line, edit.start)),
            Position::new(row, byte_to_utf16(line, edit.end)),
        ),
        new_text: String::new(),
    }
}

/// Converts a byte column within `line` to UTF-16 code units.
///
/// Columns past the end of the line clamp to its length.
pub fn byte_to_utf16(line: &str, byte_col: usize) -> u32 {
    line.char_indices()
        .take_while(|(offset, _)| *offset < byte_col)
        .map(|(_, ch)| ch.len_utf16() as u32)
        .sum()
}

fn utf16_len(line: &str) -> u32 {
    line.chars().map(|ch| ch.len_utf16() as u32).sum()
}
