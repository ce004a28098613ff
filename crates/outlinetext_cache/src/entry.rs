//! Cache entry types.

use std::time::{Duration, Instant};

use outlinetext_parser::ParseResult;

/// A cached parse result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored result, returned as-is on every hit.
    pub result: ParseResult,

    /// When the entry was inserted.
    pub created_at: Instant,

    /// When the entry was last returned or inserted.
    pub last_accessed_at: Instant,

    /// Byte length of the content this entry was computed from.
    pub content_len: usize,
}

impl CacheEntry {
    /// Creates an entry inserted at `now`.
    pub fn new(result: ParseResult, content_len: usize, now: Instant) -> Self {
        Self {
            result,
            created_at: now,
            last_accessed_at: now,
            content_len,
        }
    }

    /// Returns the entry's age at `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Returns true if the entry is strictly older than `max_age` at `now`.
    pub fn is_expired(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }

    /// Marks the entry as accessed at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.last_accessed_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_timestamps() {
        let now = Instant::now();
        let entry = CacheEntry::new(ParseResult::default(), 10, now);

        assert_eq!(entry.created_at, now);
        assert_eq!(entry.last_accessed_at, now);
        assert_eq!(entry.age(now), Duration::ZERO);
    }

    #[test]
    fn test_expiry_is_strict() {
        let now = Instant::now();
        let entry = CacheEntry::new(ParseResult::default(), 0, now);
        let max_age = Duration::from_secs(60);

        assert!(!entry.is_expired(max_age, now + max_age));
        assert!(entry.is_expired(max_age, now + max_age + Duration::from_millis(1)));
    }

    #[test]
    fn test_touch_keeps_creation_time() {
        let now = Instant::now();
        let mut entry = CacheEntry::new(ParseResult::default(), 0, now);
        let later = now + Duration::from_secs(5);

        entry.touch(later);

        assert_eq!(entry.created_at, now);
        assert_eq!(entry.last_accessed_at, later);
        assert_eq!(entry.age(later), Duration::from_secs(5));
    }
}
