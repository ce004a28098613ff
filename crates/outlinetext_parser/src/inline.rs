//! Span-level markup substitution and HTML escaping.
//!
//! Substitutions run in a fixed order because the patterns can nest or
//! collide: bold, italic, highlight, strikethrough, link, image, inline code.
//! Every pattern is non-greedy and confined to a single line.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex is valid"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//(.*?)//").expect("italic regex is valid"));

static MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").expect("mark regex is valid"));

static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.*?)~~").expect("strike regex is valid"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link regex is valid"));

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image regex is valid"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code regex is valid"));

/// Applies all span-level substitutions to one line of text.
///
/// The output contains HTML tags and must not be escaped again.
pub fn transform(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>${1}</em>");
    let text = MARK_RE.replace_all(&text, "<mark>${1}</mark>");
    let text = STRIKE_RE.replace_all(&text, "<del>${1}</del>");
    let text = replace_links(&text);
    let text = IMAGE_RE.replace_all(&text, r#"<img src="${2}" alt="${1}" loading="lazy" />"#);
    let text = CODE_RE.replace_all(&text, "<code>${1}</code>");
    text.into_owned()
}

/// Replaces `[text](url)` with an anchor, leaving `![alt](url)` for the image rule.
fn replace_links(haystack: &str) -> Cow<'_, str> {
    LINK_RE.replace_all(haystack, |caps: &Captures<'_>| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let is_image = caps
            .get(0)
            .is_some_and(|m| haystack[..m.start()].ends_with('!'));
        if is_image {
            whole.to_string()
        } else {
            format!(r#"<a href="{}">{}</a>"#, &caps[2], &caps[1])
        }
    })
}

/// Escapes `&`, `<`, `>`, `"` and `'` for verbatim content such as code blocks.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::bold("**b**", "<strong>b</strong>")]
    #[case::italic("//i//", "<em>i</em>")]
    #[case::mark("__m__", "<mark>m</mark>")]
    #[case::strike("~~s~~", "<del>s</del>")]
    #[case::link("[a](http://x)", r#"<a href="http://x">a</a>"#)]
    #[case::image("![alt](img.png)", r#"<img src="img.png" alt="alt" loading="lazy" />"#)]
    #[case::inline_code("`x`", "<code>x</code>")]
    #[case::plain("nothing here", "nothing here")]
    fn test_single_rule(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(transform(input), expected);
    }

    #[test]
    fn test_non_greedy_matches() {
        assert_eq!(
            transform("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_unmatched_markup_is_left_alone() {
        assert_eq!(transform("**open"), "**open");
        assert_eq!(transform("`tick"), "`tick");
        assert_eq!(transform("[text]"), "[text]");
    }

    #[test]
    fn test_mixed_line() {
        let out = transform("**bold** //italic// [a](http://x)");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
        assert!(out.contains(r#"<a href="http://x">a</a>"#));
    }

    #[test]
    fn test_image_and_link_on_same_line() {
        let out = transform("![logo](l.png) see [docs](d.html)");
        assert_eq!(
            out,
            r#"<img src="l.png" alt="logo" loading="lazy" /> see <a href="d.html">docs</a>"#
        );
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            transform("[a](1)[b](2)"),
            r#"<a href="1">a</a><a href="2">b</a>"#
        );
    }

    #[test]
    fn test_empty_inline_code_is_not_code() {
        assert_eq!(transform("``"), "``");
    }

    #[test]
    fn test_bold_inside_inline_code_is_still_transformed() {
        // Substitutions run in order, so earlier rules see text inside backticks.
        assert_eq!(transform("`**x**`"), "<code><strong>x</strong></code>");
    }

    #[test]
    fn test_escape_html() {
        let escaped = escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#);
        assert!(escaped.contains("&lt;a href="));
        assert!(escaped.contains("&quot;x&quot;"));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&gt;"));
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn test_escape_html_leaves_plain_text() {
        assert_eq!(escape_html("let x = 1;"), "let x = 1;");
    }
}
