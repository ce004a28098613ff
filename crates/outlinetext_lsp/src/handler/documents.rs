//! Document lifecycle handlers (open, change, save, close).

use tower_lsp::lsp_types::*;
use tracing::debug;

use crate::state::{DocumentData, SharedState};

/// Handles the `textDocument/didOpen` notification.
///
/// Returns the URI, text, and version for immediate validation.
pub async fn handle_did_open(
    state: &SharedState,
    params: DidOpenTextDocumentParams,
) -> (Url, String, i32) {
    debug!("Document opened: {}", params.text_document.uri);

    let TextDocumentItem {
        uri, text, version, ..
    } = params.text_document;

    state.documents.write().insert(
        uri.clone(),
        DocumentData {
            text: text.clone(),
            version,
        },
    );

    (uri, text, version)
}

/// Handles the `textDocument/didChange` notification.
///
/// Returns the URI, text, and version for debounced validation.
pub async fn handle_did_change(
    state: &SharedState,
    params: DidChangeTextDocumentParams,
) -> Option<(Url, String, i32)> {
    debug!("Document changed: {}", params.text_document.uri);

    // Full sync: the last change carries the whole document.
    let change = params.content_changes.into_iter().last()?;
    let uri = params.text_document.uri;
    let version = params.text_document.version;
    let text = change.text;

    state.documents.write().insert(
        uri.clone(),
        DocumentData {
            text: text.clone(),
            version,
        },
    );

    Some((uri, text, version))
}

/// Handles the `textDocument/didSave` notification.
pub async fn handle_did_save(
    state: &SharedState,
    params: DidSaveTextDocumentParams,
) -> Option<(Url, String)> {
    debug!("Document saved: {}", params.text_document.uri);

    let uri = params.text_document.uri;
    let text = match params.text {
        Some(text) => text,
        None => state.documents.read().get(&uri)?.text.clone(),
    };
    Some((uri, text))
}

/// Handles the `textDocument/didClose` notification.
pub async fn handle_did_close(state: &SharedState, params: DidCloseTextDocumentParams) -> Url {
    debug!("Document closed: {}", params.text_document.uri);

    state.documents.write().remove(&params.text_document.uri);
    params.text_document.uri
}
