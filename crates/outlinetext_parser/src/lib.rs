//! # outlinetext_parser
//!
//! Line-oriented parser that turns OutlineText markup into HTML.
//!
//! This crate provides:
//! - A `Parser` trait so alternative backends can be substituted
//! - The built-in `OutlineTextParser`, a chain of block parsers driven
//!   over a `LineCursor`
//! - Span-level markup substitution (`inline::transform`) and HTML escaping
//! - Advisory checks (bracket balance, document size) reported as diagnostics
//!
//! ## Architecture
//!
//! The document is split into lines and scanned once. For every position the
//! block chain is consulted in priority order (header, code block, list,
//! empty line, paragraph); the first block that claims the current line
//! consumes one or more lines and appends HTML to the `ParseContext`.
//!
//! ## Example
//!
//! ```rust
//! use outlinetext_parser::OutlineTextParser;
//!
//! let parser = OutlineTextParser::new();
//! let result = parser.parse_document("# Hello\n**world**");
//!
//! assert!(result.html.contains("<h1>Hello</h1>"));
//! assert!(result.html.contains("<strong>world</strong>"));
//! ```

mod block;
pub mod checks;
mod context;
mod cursor;
mod error;
pub mod inline;
mod outline;
mod result;
mod traits;

pub use block::{BLOCK_CHAIN, BlockKind};
pub use context::ParseContext;
pub use cursor::LineCursor;
pub use error::ParseError;
pub use outline::{OUTPUT_CLASS, OutlineTextParser};
pub use result::{
    Diagnostic, HeadingInfo, ParseMetadata, ParseOptions, ParseResult, ReferenceInfo, Severity,
};
pub use traits::Parser;
