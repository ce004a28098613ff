//! Block-level parsers.
//!
//! Each block kind pairs a lookahead-only claim predicate with a consume step
//! that advances the cursor and writes into the [`ParseContext`]. The
//! orchestrator tries them in [`BLOCK_CHAIN`] order; `Paragraph` is the
//! catch-all and must stay last.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::inline::{escape_html, transform};
use crate::{LineCursor, ParseContext};

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("header regex is valid"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*+\-]\s+(.+)$").expect("list item regex is valid"));

const FENCE: &str = "```";

/// The kinds of block a line can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `# Title` through `###### Title`.
    Header,
    /// A fenced code block opened by a line starting with three backticks.
    CodeBlock,
    /// A run of `*`, `+` or `-` items, rendered as one flat list.
    List,
    /// A blank or whitespace-only line.
    EmptyLine,
    /// Any other non-empty line.
    Paragraph,
}

/// Priority order in which blocks compete for the current line.
pub const BLOCK_CHAIN: [BlockKind; 5] = [
    BlockKind::Header,
    BlockKind::CodeBlock,
    BlockKind::List,
    BlockKind::EmptyLine,
    BlockKind::Paragraph,
];

impl BlockKind {
    /// Returns true if this block would handle the cursor's current line.
    ///
    /// Never moves the cursor.
    pub fn can_claim(self, cursor: &LineCursor<'_>) -> bool {
        let line = cursor.current();
        match self {
            Self::Header => HEADER_RE.is_match(line),
            Self::CodeBlock => line.trim().starts_with(FENCE),
            Self::List => LIST_ITEM_RE.is_match(line),
            Self::EmptyLine => line.trim().is_empty(),
            Self::Paragraph => !line.trim().is_empty(),
        }
    }

    /// Consumes the block starting at the current line.
    ///
    /// Always advances the cursor by at least one line when called on a line
    /// this block claims.
    pub fn consume(self, cursor: &mut LineCursor<'_>, ctx: &mut ParseContext) {
        trace!(block = ?self, line = cursor.position(), "consuming block");
        match self {
            Self::Header => consume_header(cursor, ctx),
            Self::CodeBlock => consume_code_block(cursor, ctx),
            Self::List => consume_list(cursor, ctx),
            Self::EmptyLine => {
                ctx.append_html("<br>");
                cursor.advance();
            }
            Self::Paragraph => {
                ctx.append_html(&format!("<p>{}</p>", transform(cursor.current())));
                cursor.advance();
            }
        }
    }
}

fn consume_header(cursor: &mut LineCursor<'_>, ctx: &mut ParseContext) {
    if let Some(caps) = HEADER_RE.captures(cursor.current()) {
        let level = caps[1].len();
        let raw = &caps[2];
        ctx.append_html(&format!("<h{level}>{}</h{level}>", transform(raw)));
        ctx.add_heading(level as u8, raw, cursor.position());
    }
    cursor.advance();
}

fn consume_code_block(cursor: &mut LineCursor<'_>, ctx: &mut ParseContext) {
    let opener = cursor.current().trim();
    let language = opener.strip_prefix(FENCE).unwrap_or_default();
    ctx.append_html(&format!(
        r#"<pre><code class="language-{}">"#,
        escape_html(language)
    ));
    cursor.advance();

    while !cursor.at_end() && cursor.current().trim() != FENCE {
        ctx.append_html(&escape_html(cursor.current()));
        ctx.append_html("\n");
        cursor.advance();
    }

    ctx.append_html("</code></pre>");

    // Closing fence, if the block was terminated.
    cursor.advance();
}

fn consume_list(cursor: &mut LineCursor<'_>, ctx: &mut ParseContext) {
    ctx.append_html("<ul>");
    while !cursor.at_end() {
        let Some(caps) = LIST_ITEM_RE.captures(cursor.current()) else {
            break;
        };
        ctx.append_html(&format!("<li>{}</li>", transform(&caps[1])));
        cursor.advance();
    }
    ctx.append_html("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn claimant(line: &str) -> Option<BlockKind> {
        let cursor = LineCursor::new(vec![line]);
        BLOCK_CHAIN.into_iter().find(|kind| kind.can_claim(&cursor))
    }

    fn run(kind: BlockKind, lines: &[&str]) -> (String, usize) {
        let mut cursor = LineCursor::new(lines.to_vec());
        let mut ctx = ParseContext::new();
        kind.consume(&mut cursor, &mut ctx);
        (ctx.html().to_string(), cursor.position())
    }

    #[rstest]
    #[case::h1("# Title", BlockKind::Header)]
    #[case::h6("###### Deep", BlockKind::Header)]
    #[case::seven_hashes("####### Too deep", BlockKind::Paragraph)]
    #[case::no_space("#NoSpace", BlockKind::Paragraph)]
    #[case::bare_fence("```", BlockKind::CodeBlock)]
    #[case::tagged_fence("```rust", BlockKind::CodeBlock)]
    #[case::indented_fence("   ```js", BlockKind::CodeBlock)]
    #[case::star_item("* item", BlockKind::List)]
    #[case::plus_item("+ item", BlockKind::List)]
    #[case::dash_item("- item", BlockKind::List)]
    #[case::indented_item("    - nested", BlockKind::List)]
    #[case::rule("---", BlockKind::Paragraph)]
    #[case::empty("", BlockKind::EmptyLine)]
    #[case::whitespace(" \t ", BlockKind::EmptyLine)]
    #[case::text("plain text", BlockKind::Paragraph)]
    fn test_claim_priority(#[case] line: &str, #[case] expected: BlockKind) {
        assert_eq!(claimant(line), Some(expected));
    }

    #[test]
    fn test_can_claim_does_not_move_cursor() {
        let cursor = LineCursor::new(vec!["# a", "b"]);
        for kind in BLOCK_CHAIN {
            kind.can_claim(&cursor);
        }
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_header_records_raw_text() {
        let mut cursor = LineCursor::new(vec!["## **Bold** title"]);
        let mut ctx = ParseContext::new();
        BlockKind::Header.consume(&mut cursor, &mut ctx);

        assert_eq!(ctx.html(), "<h2><strong>Bold</strong> title</h2>");
        assert_eq!(ctx.headings()[0].text, "**Bold** title");
        assert_eq!(ctx.headings()[0].level, 2);
        assert_eq!(ctx.headings()[0].line, 0);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_code_block_is_escaped_not_transformed() {
        let (html, pos) = run(BlockKind::CodeBlock, &["```js", "<b>**x**</b>", "```", "after"]);
        assert_eq!(
            html,
            "<pre><code class=\"language-js\">&lt;b&gt;**x**&lt;/b&gt;\n</code></pre>"
        );
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_code_block_without_language() {
        let (html, _) = run(BlockKind::CodeBlock, &["```", "x", "```"]);
        assert_eq!(html, "<pre><code class=\"language-\">x\n</code></pre>");
    }

    #[test]
    fn test_code_block_unterminated() {
        let (html, pos) = run(BlockKind::CodeBlock, &["```py", "a", "b"]);
        assert_eq!(html, "<pre><code class=\"language-py\">a\nb\n</code></pre>");
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_code_block_closing_fence_may_be_indented() {
        let (_, pos) = run(BlockKind::CodeBlock, &["```", "x", "  ```  ", "y"]);
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_list_collects_contiguous_items() {
        let (html, pos) = run(
            BlockKind::List,
            &["- one", "  * **two**", "+ three", "not an item", "- four"],
        );
        assert_eq!(
            html,
            "<ul><li>one</li><li><strong>two</strong></li><li>three</li></ul>"
        );
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_empty_line_and_paragraph() {
        let (html, pos) = run(BlockKind::EmptyLine, &["   "]);
        assert_eq!(html, "<br>");
        assert_eq!(pos, 1);

        let (html, pos) = run(BlockKind::Paragraph, &["some //text//"]);
        assert_eq!(html, "<p>some <em>text</em></p>");
        assert_eq!(pos, 1);
    }
}
