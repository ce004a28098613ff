//! Line layout as editors see it.

/// Splits `content` into lines with their terminators.
///
/// `\r\n`, `\n` and a lone `\r` each end a line. The last line has an empty
/// terminator, so an empty document yields one empty line.
pub(crate) fn lines_with_endings(content: &str) -> Vec<(&str, &str)> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => i + 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 2,
            b'\r' => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push((&content[start..i], &content[i..end]));
        start = end;
        i = end;
    }

    lines.push((&content[start..], ""));
    lines
}

/// Splits `content` into lines, dropping the terminators.
pub fn split_editor_lines(content: &str) -> Vec<&str> {
    lines_with_endings(content)
        .into_iter()
        .map(|(line, _)| line)
        .collect()
}
