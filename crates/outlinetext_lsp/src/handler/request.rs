//! Custom `outlinetext/*` requests.

use std::sync::Arc;

use outlinetext_core::ServiceError;
use outlinetext_parser::{ParseOptions, ParseResult};
use serde::Deserialize;
use tower_lsp::jsonrpc::{Error, Result};
use tracing::{debug, error};

use crate::state::SharedState;

/// Parameters of `outlinetext/parse` and `outlinetext/preview`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    /// URI of the document, for logging.
    #[serde(default)]
    pub uri: Option<String>,
    /// Full document text.
    pub content: String,
    /// Per-request options.
    #[serde(default)]
    pub options: ParseOptions,
}

/// Handles `outlinetext/parse`.
pub async fn handle_parse(state: &SharedState, params: ParseRequest) -> Result<ParseResult> {
    debug!("Parse request for {}", params.uri.as_deref().unwrap_or("<unknown>"));

    let state = Arc::clone(state);
    let outcome = tokio::task::spawn_blocking(move || {
        state.service.parse(&params.content, &params.options)
    })
    .await
    .map_err(|e| {
        error!("Parse task failed: {}", e);
        Error::internal_error()
    })?;

    outcome.map_err(to_rpc_error)
}

/// Handles `outlinetext/preview`.
pub async fn handle_preview(state: &SharedState, params: ParseRequest) -> Result<String> {
    handle_parse(state, params).await.map(|result| result.html)
}

/// Logs a service failure and maps it to a JSON-RPC error.
fn to_rpc_error(err: ServiceError) -> Error {
    error!("Parse request failed: {}", err);
    if err.is_invalid_request() {
        Error::invalid_params(err.to_string())
    } else {
        let mut rpc = Error::internal_error();
        rpc.message = err.to_string().into();
        rpc
    }
}
