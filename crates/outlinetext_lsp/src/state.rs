//! LSP Backend state management.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use outlinetext_core::{ParseService, Settings};
use parking_lot::RwLock;
use tower_lsp::lsp_types::Url;

/// Document content and version.
#[derive(Debug, Clone)]
pub(crate) struct DocumentData {
    pub text: String,
    pub version: i32,
}

/// Shared backend state.
pub(crate) struct BackendState {
    /// Open documents.
    pub documents: RwLock<HashMap<Url, DocumentData>>,
    /// Parser, result cache and settings.
    pub service: ParseService,
    /// Workspace root path.
    pub workspace_root: RwLock<Option<PathBuf>>,
}

impl fmt::Debug for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendState")
            .field("documents", &self.documents.read().len())
            .field("service", &self.service)
            .field("workspace_root", &*self.workspace_root.read())
            .finish()
    }
}

impl BackendState {
    /// Creates a new state with default settings.
    pub fn new() -> Self {
        Self::with_service(ParseService::new(Settings::default()))
    }

    /// Creates a new state around an existing service.
    pub fn with_service(service: ParseService) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            service,
            workspace_root: RwLock::new(None),
        }
    }

    /// Returns a snapshot of every open document.
    pub fn open_documents(&self) -> Vec<(Url, DocumentData)> {
        self.documents
            .read()
            .iter()
            .map(|(uri, doc)| (uri.clone(), doc.clone()))
            .collect()
    }
}

impl Default for BackendState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for shared state.
pub type SharedState = Arc<BackendState>;
