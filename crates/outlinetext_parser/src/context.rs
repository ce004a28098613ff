//! Accumulator for a single parse pass.

use std::time::Duration;

use crate::{Diagnostic, HeadingInfo, ParseMetadata, ParseResult};

/// Collects HTML, headings and diagnostics while the block chain runs.
///
/// A context belongs to exactly one pass and is consumed by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct ParseContext {
    html: String,
    headings: Vec<HeadingInfo>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an HTML fragment.
    pub fn append_html(&mut self, fragment: &str) {
        self.html.push_str(fragment);
    }

    /// Records a heading.
    pub fn add_heading(&mut self, level: u8, text: impl Into<String>, line: usize) {
        self.headings.push(HeadingInfo {
            level,
            text: text.into(),
            line,
        });
    }

    /// Appends already-built diagnostics.
    pub fn extend_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Returns the HTML emitted so far, without the output container.
    #[cfg(test)]
    pub(crate) fn html(&self) -> &str {
        &self.html
    }

    /// Returns the headings recorded so far.
    #[cfg(test)]
    pub(crate) fn headings(&self) -> &[HeadingInfo] {
        &self.headings
    }

    /// Returns the diagnostics recorded so far.
    #[cfg(test)]
    pub(crate) fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Wraps the accumulated HTML in `wrapper_class` and builds the result.
    pub fn finish(self, wrapper_class: &str, elapsed: Duration) -> ParseResult {
        ParseResult {
            html: format!(r#"<div class="{}">{}</div>"#, wrapper_class, self.html),
            metadata: ParseMetadata {
                parse_time: elapsed.as_secs_f64() * 1000.0,
                cache_hit: None,
                headings: self.headings,
                references: Vec::new(),
            },
            diagnostics: self.diagnostics,
        }
    }
}
