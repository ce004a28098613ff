//! Configuration management for LSP server.

use outlinetext_core::Settings;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::state::BackendState;

/// Settings section read from `workspace/didChangeConfiguration`.
pub const SETTINGS_SECTION: &str = "outlinetext";

/// Reloads configuration from the workspace root.
///
/// Returns true if new settings were applied.
pub fn reload_config(state: &BackendState) -> bool {
    let Some(root) = state.workspace_root.read().clone() else {
        return false;
    };

    let Some(config_path) = Settings::discover(&root) else {
        debug!("No config file in {}", root.display());
        return false;
    };

    info!("Found config file: {}", config_path.display());
    match Settings::from_file(&config_path) {
        Ok(settings) => {
            state.service.update_settings(settings);
            info!("Loaded configuration from workspace");
            true
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            false
        }
    }
}

/// Applies the `outlinetext` section of editor settings.
///
/// Returns true if new settings were applied.
pub fn apply_editor_settings(state: &BackendState, settings: &Value) -> bool {
    let Some(section) = settings.get(SETTINGS_SECTION) else {
        debug!("No '{}' section in configuration change", SETTINGS_SECTION);
        return false;
    };

    match Settings::from_value(section.clone()) {
        Ok(settings) => {
            state.service.update_settings(settings);
            true
        }
        Err(e) => {
            warn!("Ignoring invalid editor settings: {}", e);
            false
        }
    }
}
