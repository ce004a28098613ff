//! Document formatting handler.

use outlinetext_core::{split_editor_lines, trailing_whitespace_edits};
use tower_lsp::lsp_types::*;
use tracing::debug;

use crate::conversion::to_text_edit;
use crate::state::BackendState;

/// Handles the `textDocument/formatting` request.
///
/// Removes trailing spaces and tabs. Returns `None` for unknown documents.
pub async fn handle_formatting(
    state: &BackendState,
    params: DocumentFormattingParams,
) -> Option<Vec<TextEdit>> {
    let uri = params.text_document.uri;
    let text = state.documents.read().get(&uri)?.text.clone();

    let lines = split_editor_lines(&text);
    let edits: Vec<TextEdit> = trailing_whitespace_edits(&text)
        .iter()
        .map(|edit| to_text_edit(edit, &lines))
        .collect();

    debug!("Formatting {}: {} edits", uri, edits.len());
    Some(edits)
}
