//! Parser trait definition.

use crate::{ParseError, ParseOptions, ParseResult};

/// Trait for backends that render OutlineText into a [`ParseResult`].
///
/// The request layer only depends on this trait, so an alternative backend
/// (for example one that delegates to an external interpreter) can replace
/// the built-in parser without touching caching or transport code.
///
/// # Example
///
/// ```rust
/// use outlinetext_parser::{ParseError, ParseOptions, ParseResult, Parser};
///
/// struct Unavailable;
///
/// impl Parser for Unavailable {
///     fn name(&self) -> &str {
///         "unavailable"
///     }
///
///     fn parse(&self, _content: &str, _options: &ParseOptions) -> Result<ParseResult, ParseError> {
///         Err(ParseError::initialization("runtime missing"))
///     }
///
///     fn is_ready(&self) -> bool {
///         false
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses the complete document text.
    ///
    /// # Arguments
    ///
    /// * `content` - The full document text
    /// * `options` - Per-request options
    fn parse(&self, content: &str, options: &ParseOptions) -> Result<ParseResult, ParseError>;

    /// Returns true once the backend is able to serve requests.
    fn is_ready(&self) -> bool {
        true
    }
}
