//! LSP request/notification handlers.

mod completion;
mod configuration;
mod documents;
mod files;
mod formatting;
mod initialize;
mod request;

pub use completion::{TRIGGER_CHARACTERS, handle_completion};
pub use configuration::handle_did_change_configuration;
pub use documents::{handle_did_change, handle_did_close, handle_did_open, handle_did_save};
pub use files::handle_did_change_watched_files;
pub use formatting::handle_formatting;
pub use initialize::{handle_initialize, handle_initialized, handle_shutdown};
pub use request::{ParseRequest, handle_parse, handle_preview};
