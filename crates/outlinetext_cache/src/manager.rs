//! Bounded, time-limited result cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use outlinetext_parser::ParseResult;
use serde::Serialize;
use tracing::debug;

use crate::CacheEntry;

/// Number of hex characters kept from the content digest.
const KEY_LEN: usize = 16;

/// Limits applied by a [`ResultCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once.
    pub max_entries: usize,
    /// Maximum age of an entry before it is treated as a miss.
    pub max_age: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            max_age: Duration::from_secs(5 * 60),
        }
    }
}

/// Point-in-time cache statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Current number of entries.
    pub size: usize,
    /// Configured capacity.
    pub max_size: usize,
    /// Sum of the byte lengths of the cached documents.
    pub total_memory: usize,
    /// Mean entry age in milliseconds, 0 when empty.
    pub average_age: f64,
    /// Hits over lookups since the last clear, 0 before any lookup.
    pub hit_rate: f64,
}

/// Maps document content to the result of parsing it.
///
/// No operation fails: absence is a miss, and a full cache makes room by
/// evicting the least recently accessed entry.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    config: CacheConfig,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    /// Creates an empty cache with the given limits.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the configured limits.
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Computes the cache key of `content`.
    pub fn key(content: &str) -> String {
        let mut hex = blake3::hash(content.as_bytes()).to_hex().to_string();
        hex.truncate(KEY_LEN);
        hex
    }

    /// Looks up the result stored for `content`.
    pub fn get(&mut self, content: &str) -> Option<ParseResult> {
        self.get_at(content, Instant::now())
    }

    /// Stores `result` as the parse of `content`.
    pub fn put(&mut self, content: &str, result: ParseResult) {
        self.put_at(content, result, Instant::now());
    }

    /// Drops every entry and resets the hit counters.
    pub fn clear(&mut self) {
        debug!("Clearing {} cache entries", self.entries.len());
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats_at(Instant::now())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_at(&mut self, content: &str, now: Instant) -> Option<ParseResult> {
        let key = Self::key(content);

        let Some(entry) = self.entries.get_mut(&key) else {
            self.misses += 1;
            debug!("Cache miss for {}", key);
            return None;
        };

        if entry.is_expired(self.config.max_age, now) {
            self.entries.remove(&key);
            self.misses += 1;
            debug!("Cache entry {} expired", key);
            return None;
        }

        entry.touch(now);
        self.hits += 1;
        debug!("Cache hit for {}", key);
        Some(entry.result.clone())
    }

    fn put_at(&mut self, content: &str, result: ParseResult, now: Instant) {
        if self.config.max_entries == 0 {
            return;
        }

        let key = Self::key(content);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_entries {
            self.evict_least_recent();
        }

        self.entries
            .insert(key, CacheEntry::new(result, content.len(), now));
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            debug!("Evicting cache entry {}", key);
            self.entries.remove(&key);
        }
    }

    fn stats_at(&self, now: Instant) -> CacheStats {
        let total_memory = self.entries.values().map(|e| e.content_len).sum();

        let average_age = if self.entries.is_empty() {
            0.0
        } else {
            let total: f64 = self
                .entries
                .values()
                .map(|e| e.age(now).as_secs_f64() * 1000.0)
                .sum();
            total / self.entries.len() as f64
        };

        let lookups = self.hits + self.misses;
        let hit_rate = if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        };

        CacheStats {
            size: self.entries.len(),
            max_size: self.config.max_entries,
            total_memory,
            average_age,
            hit_rate,
        }
    }
}
