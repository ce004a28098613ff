//! The built-in OutlineText parser.

use std::time::Instant;

use tracing::debug;

use crate::checks::check_brackets;
use crate::{
    BLOCK_CHAIN, LineCursor, ParseContext, ParseError, ParseOptions, ParseResult, Parser,
};

/// CSS class of the element wrapping every rendered document.
pub const OUTPUT_CLASS: &str = "outlinetext-parser-output";

/// Parser driving the block chain over the document's lines.
///
/// Parsing is total: every input produces well-formed HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineTextParser;

impl OutlineTextParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete document.
    pub fn parse_document(&self, content: &str) -> ParseResult {
        let start = Instant::now();

        let normalized = content.replace('\r', "");
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut ctx = ParseContext::new();
        ctx.extend_diagnostics(check_brackets(lines.iter().copied()));

        let mut cursor = LineCursor::new(lines);
        while !cursor.at_end() {
            Self::dispatch(&mut cursor, &mut ctx);
        }

        let result = ctx.finish(OUTPUT_CLASS, start.elapsed());
        debug!(
            lines = cursor.len(),
            headings = result.metadata.headings.len(),
            diagnostics = result.diagnostics.len(),
            "parsed document in {:.3}ms",
            result.metadata.parse_time
        );
        result
    }

    /// Hands the current line to the first block that claims it.
    fn dispatch(cursor: &mut LineCursor<'_>, ctx: &mut ParseContext) {
        match BLOCK_CHAIN.into_iter().find(|kind| kind.can_claim(cursor)) {
            Some(kind) => kind.consume(cursor, ctx),
            // Unreachable with the paragraph catch-all, but guarantees progress.
            None => cursor.advance(),
        }
    }
}

impl Parser for OutlineTextParser {
    fn name(&self) -> &str {
        "outlinetext"
    }

    fn parse(&self, content: &str, options: &ParseOptions) -> Result<ParseResult, ParseError> {
        if let Some(uri) = &options.source_uri {
            debug!("Parsing {}", uri);
        }
        Ok(self.parse_document(content))
    }
}
