//! Editor configuration handler.

use tower_lsp::lsp_types::DidChangeConfigurationParams;
use tracing::info;

use crate::config::apply_editor_settings;
use crate::state::BackendState;

/// Handles the `workspace/didChangeConfiguration` notification.
///
/// Returns true if the settings changed and open documents need revalidation.
pub async fn handle_did_change_configuration(
    state: &BackendState,
    params: DidChangeConfigurationParams,
) -> bool {
    let applied = apply_editor_settings(state, &params.settings);
    if applied {
        info!("Editor settings applied, cache cleared");
    }
    applied
}
