//! Subcommand implementations

mod check;
mod fmt;
mod init;
mod lsp;
mod parse;

pub use check::run_check;
pub use fmt::run_fmt;
pub use init::run_init;
pub use lsp::run_lsp;
pub use parse::run_parse;
