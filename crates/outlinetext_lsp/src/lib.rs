//! OutlineText LSP Server
//!
//! Language Server Protocol implementation for OutlineText.
//! Provides live diagnostics, snippet completion, formatting and the
//! `outlinetext/parse` / `outlinetext/preview` requests used by previews.

mod config;
mod conversion;
mod debounce;
mod handler;
mod state;

use std::sync::Arc;

use outlinetext_parser::ParseResult;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, ClientSocket, LanguageServer, LspService, Server};
use tracing::{debug, info};

pub use config::SETTINGS_SECTION;
pub use handler::ParseRequest;

use crate::conversion::to_lsp_diagnostics;
use crate::debounce::spawn_debounced_validation;
use crate::state::{BackendState, SharedState};

/// Method name of the full parse request.
pub const PARSE_METHOD: &str = "outlinetext/parse";

/// Method name of the HTML-only preview request.
pub const PREVIEW_METHOD: &str = "outlinetext/preview";

/// The LSP backend for OutlineText.
#[derive(Clone)]
pub struct Backend {
    /// LSP client for sending notifications.
    client: Client,
    /// Shared state
    state: SharedState,
}

impl Backend {
    /// Creates a new backend with the given client.
    ///
    /// Settings start at their defaults; a workspace configuration file is
    /// loaded during `initialize` if available.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(BackendState::new()),
        }
    }

    /// Validates a document and publishes diagnostics.
    async fn validate_document(&self, uri: Url, text: &str, version: Option<i32>) {
        debug!("Validating document: {}", uri);

        let diagnostics = self.state.service.validate(text);
        let lsp_diagnostics = to_lsp_diagnostics(&diagnostics, text);

        self.client
            .publish_diagnostics(uri, lsp_diagnostics, version)
            .await;
    }

    /// Re-validates every open document.
    async fn validate_all(&self) {
        for (uri, doc) in self.state.open_documents() {
            self.validate_document(uri, &doc.text, Some(doc.version))
                .await;
        }
    }

    /// Handles `outlinetext/parse`.
    pub async fn parse_request(&self, params: ParseRequest) -> Result<ParseResult> {
        handler::handle_parse(&self.state, params).await
    }

    /// Handles `outlinetext/preview`.
    pub async fn preview_request(&self, params: ParseRequest) -> Result<String> {
        handler::handle_preview(&self.state, params).await
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        handler::handle_initialize(&self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        handler::handle_initialized(&self.client).await;
    }

    async fn shutdown(&self) -> Result<()> {
        handler::handle_shutdown().await
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let (uri, text, version) = handler::handle_did_open(&self.state, params).await;
        self.validate_document(uri, &text, Some(version)).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let Some((uri, text, version)) = handler::handle_did_change(&self.state, params).await
        else {
            return;
        };

        if !self.state.service.settings().auto_refresh {
            return;
        }

        let backend = self.clone();
        spawn_debounced_validation(
            Arc::clone(&self.state),
            uri,
            text,
            version,
            move |uri, text, version| async move {
                backend.validate_document(uri, &text, version).await;
            },
        );
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        if let Some((uri, text)) = handler::handle_did_save(&self.state, params).await {
            self.validate_document(uri, &text, None).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = handler::handle_did_close(&self.state, params).await;
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        if handler::handle_did_change_configuration(&self.state, params).await {
            self.validate_all().await;
        }
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        if handler::handle_did_change_watched_files(&self.state, params).await {
            self.validate_all().await;
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        Ok(handler::handle_completion(params).await)
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        Ok(handler::handle_formatting(&self.state, params).await)
    }
}

/// Builds the service with the custom `outlinetext/*` methods registered.
pub fn build_service() -> (LspService<Backend>, ClientSocket) {
    LspService::build(Backend::new)
        .custom_method(PARSE_METHOD, Backend::parse_request)
        .custom_method(PREVIEW_METHOD, Backend::preview_request)
        .finish()
}

/// Starts the LSP server on stdio.
///
/// This function does not return unless an error occurs or the server shuts down.
pub async fn run() {
    info!("OutlineText LSP server starting...");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = build_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}
