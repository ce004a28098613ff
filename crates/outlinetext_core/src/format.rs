//! Trailing-whitespace formatting.

use crate::lines::{lines_with_endings, split_editor_lines};

/// Deletion of the trailing spaces and tabs on one line.
///
/// Offsets are byte offsets into the line, without its line terminator.
/// Lines are counted the way editors count them, so a lone `\r` ends a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimEdit {
    /// 0-based line number.
    pub line: usize,
    /// Start of the whitespace run. 0 for whitespace-only lines.
    pub start: usize,
    /// End of the line.
    pub end: usize,
}

fn trimmed_len(line: &str) -> usize {
    line.trim_end_matches([' ', '\t']).len()
}

/// Returns one edit per line that ends in spaces or tabs.
pub fn trailing_whitespace_edits(content: &str) -> Vec<TrimEdit> {
    split_editor_lines(content)
        .into_iter()
        .enumerate()
        .filter_map(|(line, text)| {
            let start = trimmed_len(text);
            (start < text.len()).then_some(TrimEdit {
                line,
                start,
                end: text.len(),
            })
        })
        .collect()
}

/// Removes trailing spaces and tabs from every line, keeping line endings.
pub fn strip_trailing_whitespace(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for (line, ending) in lines_with_endings(content) {
        out.push_str(&line[..trimmed_len(line)]);
        out.push_str(ending);
    }
    out
}
