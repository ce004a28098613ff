//! # outlinetext_core
//!
//! Transport-independent request handling for OutlineText.
//!
//! This crate provides:
//! - `Settings`, loaded from `.outlinetext.jsonc` / `.outlinetext.json`
//! - `ParseService`, which runs the cache-then-parse-then-store sequence
//!   against an injected `Parser` backend and a shared `ResultCache`
//! - Advisory validation (document size, bracket balance)
//! - Trailing-whitespace formatting edits
//!
//! Both the language server and the command-line front end are thin
//! adapters over these types.

mod config;
mod error;
mod format;
mod lines;
mod service;

pub use config::{CONFIG_FILES, CacheSettings, Settings};
pub use error::{ConfigError, ServiceError};
pub use format::{TrimEdit, strip_trailing_whitespace, trailing_whitespace_edits};
pub use lines::split_editor_lines;
pub use service::ParseService;
