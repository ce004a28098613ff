//! Cache-then-parse-then-store request handling.

use outlinetext_cache::{CacheStats, ResultCache};
use outlinetext_parser::checks::{check_brackets, check_document_size};
use outlinetext_parser::{
    Diagnostic, OutlineTextParser, ParseError, ParseOptions, ParseResult, Parser,
};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::{ServiceError, Settings, split_editor_lines};

/// Parses documents on behalf of a front end.
///
/// The service is shared across concurrent requests. The cache is locked only
/// around lookups and inserts, never while the backend runs, so two requests
/// for the same content may both parse and both store an identical result.
pub struct ParseService {
    backend: Box<dyn Parser + Send + Sync>,
    cache: Mutex<ResultCache>,
    settings: RwLock<Settings>,
}

impl ParseService {
    /// Creates a service backed by the built-in parser.
    pub fn new(settings: Settings) -> Self {
        Self::with_backend(Box::new(OutlineTextParser::new()), settings)
    }

    /// Creates a service backed by `backend`.
    pub fn with_backend(backend: Box<dyn Parser + Send + Sync>, settings: Settings) -> Self {
        Self {
            backend,
            cache: Mutex::new(ResultCache::new(settings.cache_config())),
            settings: RwLock::new(settings),
        }
    }

    /// Returns the name of the parser backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Returns a copy of the current settings.
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Parses `content`, serving from and filling the cache as configured.
    ///
    /// A cached result is returned with `metadata.cache_hit` set. A request
    /// with `enable_cache: Some(false)` skips the lookup but still stores.
    pub fn parse(
        &self,
        content: &str,
        options: &ParseOptions,
    ) -> Result<ParseResult, ServiceError> {
        let (max, cache_enabled) = {
            let settings = self.settings.read();
            (settings.max_document_size, settings.enable_cache)
        };

        if content.len() > max {
            return Err(ServiceError::DocumentTooLarge {
                size: content.len(),
                max,
            });
        }

        if cache_enabled && options.enable_cache != Some(false) {
            if let Some(cached) = self.cache.lock().get(content) {
                debug!("Serving cached result");
                return Ok(cached.as_cache_hit());
            }
        }

        if !self.backend.is_ready() {
            return Err(ParseError::initialization(format!(
                "backend '{}' is not available",
                self.backend.name()
            ))
            .into());
        }

        let result = self.backend.parse(content, options)?;

        if cache_enabled {
            self.cache.lock().put(content, result.clone());
        }

        Ok(result)
    }

    /// Parses `content` and returns only the HTML.
    pub fn preview(&self, content: &str, options: &ParseOptions) -> Result<String, ServiceError> {
        self.parse(content, options).map(|result| result.html)
    }

    /// Returns the advisory diagnostics for `content`.
    ///
    /// Line numbers follow the editor line layout. Empty when diagnostics are
    /// disabled.
    pub fn validate(&self, content: &str) -> Vec<Diagnostic> {
        let (enabled, max) = {
            let settings = self.settings.read();
            (settings.diagnostics_enabled, settings.max_document_size)
        };
        if !enabled {
            return Vec::new();
        }

        check_document_size(content, max)
            .into_iter()
            .chain(check_brackets(split_editor_lines(content)))
            .collect()
    }

    /// Replaces the settings.
    ///
    /// The cache is always cleared; it is rebuilt when its limits changed.
    pub fn update_settings(&self, settings: Settings) {
        let mut current = self.settings.write();
        let mut cache = self.cache.lock();
        if current.cache != settings.cache {
            *cache = ResultCache::new(settings.cache_config());
        } else {
            cache.clear();
        }

        info!("Settings updated ({})", &settings.hash()[..8]);
        *current = settings;
    }

    /// Drops every cached result.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Returns cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }
}

impl Default for ParseService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl std::fmt::Debug for ParseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseService")
            .field("backend", &self.backend.name())
            .field("settings", &*self.settings.read())
            .finish_non_exhaustive()
    }
}
