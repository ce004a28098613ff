//! OutlineText settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use outlinetext_cache::CacheConfig;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &[".outlinetext.jsonc", ".outlinetext.json"];

/// User-facing settings shared by every front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Settings {
    /// Global switch for the result cache.
    pub enable_cache: bool,

    /// Re-validate documents on every change.
    pub auto_refresh: bool,

    /// Report advisory diagnostics.
    pub diagnostics_enabled: bool,

    /// Maximum document size in bytes.
    pub max_document_size: usize,

    /// Result cache limits.
    pub cache: CacheSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_cache: true,
            auto_refresh: true,
            diagnostics_enabled: true,
            max_document_size: 1024 * 1024,
            cache: CacheSettings::default(),
        }
    }
}

/// Result cache limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CacheSettings {
    pub max_entries: usize,
    pub max_age_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        let config = CacheConfig::default();
        Self {
            max_entries: config.max_entries,
            max_age_secs: config.max_age.as_secs(),
        }
    }
}

impl From<CacheSettings> for CacheConfig {
    fn from(settings: CacheSettings) -> Self {
        Self {
            max_entries: settings.max_entries,
            max_age: Duration::from_secs(settings.max_age_secs),
        }
    }
}

impl Settings {
    /// Finds the first configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads settings from a file.
    ///
    /// Supports `.outlinetext.jsonc` and `.outlinetext.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses settings from JSON text. Comments and trailing commas are allowed.
    ///
    /// An empty document yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| ConfigError::invalid(format!("Invalid JSON: {}", e)))?;

        match value {
            Some(value) => Self::from_value(value),
            None => Ok(Self::default()),
        }
    }

    /// Converts an already-parsed JSON value, e.g. an editor settings section.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid(e.to_string()))
    }

    /// Renders the settings as the pretty-printed JSON written by `init`.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Computes a hash identifying this configuration.
    pub fn hash(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    /// Returns the cache limits in the form the cache expects.
    pub fn cache_config(&self) -> CacheConfig {
        self.cache.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.enable_cache);
        assert!(settings.auto_refresh);
        assert!(settings.diagnostics_enabled);
        assert_eq!(settings.max_document_size, 1_048_576);
        assert_eq!(settings.cache.max_entries, 100);
        assert_eq!(settings.cache.max_age_secs, 300);
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(
            r#"{
                // keep diagnostics quiet
                "diagnosticsEnabled": false,
                "cache": { "maxEntries": 10 },
            }"#,
        )
        .unwrap();

        assert!(!settings.diagnostics_enabled);
        assert!(settings.enable_cache);
        assert_eq!(settings.cache.max_entries, 10);
        assert_eq!(settings.cache.max_age_secs, 300);
    }

    #[test]
    fn test_from_json_empty_is_default() {
        assert_eq!(Settings::from_json("").unwrap(), Settings::default());
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_json(r#"{ "enableCahce": false }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Settings::from_json("{ \"enableCache\": ").is_err());
        assert!(Settings::from_json(r#"{ "enableCache": "yes" }"#).is_err());
    }

    #[test]
    fn test_hash_changes_with_settings() {
        let a = Settings::default();
        let mut b = Settings::default();
        assert_eq!(a.hash(), b.hash());

        b.max_document_size = 10;
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let settings = Settings::default();
        let parsed = Settings::from_json(&settings.to_json_pretty()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let dir = tempdir().unwrap();
        assert!(Settings::discover(dir.path()).is_none());

        fs::write(dir.path().join(".outlinetext.json"), "{}").unwrap();
        assert_eq!(
            Settings::discover(dir.path()),
            Some(dir.path().join(".outlinetext.json"))
        );

        fs::write(dir.path().join(".outlinetext.jsonc"), "{}").unwrap();
        assert_eq!(
            Settings::discover(dir.path()),
            Some(dir.path().join(".outlinetext.jsonc"))
        );
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        let err = Settings::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_cache_config_conversion() {
        let settings = Settings {
            cache: CacheSettings {
                max_entries: 3,
                max_age_secs: 7,
            },
            ..Default::default()
        };
        let config = settings.cache_config();
        assert_eq!(config.max_entries, 3);
        assert_eq!(config.max_age, Duration::from_secs(7));
    }
}
