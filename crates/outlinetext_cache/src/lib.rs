//! # outlinetext_cache
//!
//! In-memory cache of parse results, keyed by document content.
//!
//! ## Cache Strategy
//!
//! 1. **Content-addressed**: the key is a truncated BLAKE3 fingerprint of the
//!    exact document text, so identical content always maps to the same entry
//! 2. **Bounded**: at capacity, the least recently accessed entry is evicted
//! 3. **Time-limited**: entries older than the configured age are misses
//!
//! A truncated fingerprint can collide; a collision returns the result stored
//! for the other content. This is accepted for an editor-side cache.

mod entry;
mod manager;

pub use entry::CacheEntry;
pub use manager::{CacheConfig, CacheStats, ResultCache};
