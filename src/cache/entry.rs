//! Cache Entry Module
//!
//! Defines the structure for individual cache entries on the virtual clock.

use serde_json::Value;

// == Cache Entry ==
/// A stored value together with its absolute expiration instant.
///
/// The value is held in serialized form, so it shares nothing with the
/// caller's original object.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The stored value
    pub value: Value,
    /// Expiration instant in virtual seconds
    pub expires_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(value: Value, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    // == Is Live ==
    /// Checks whether the entry is still readable at `now`.
    ///
    /// Boundary condition: an entry whose expiration instant equals `now` is
    /// already expired.
    ///
    /// # Arguments
    /// * `now` - Current virtual instant in seconds
    ///
    /// # Returns
    /// - `true` if `now` is strictly before the expiration instant
    /// - `false` otherwise, including for entries stored with a TTL <= 0
    pub fn is_live(&self, now: i64) -> bool {
        now < self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in seconds, or None once expired.
    pub fn ttl_remaining(&self, now: i64) -> Option<i64> {
        self.is_live(now).then(|| self.expires_at - now)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_live_before_expiration() {
        let entry = CacheEntry::new(json!("value"), 10);
        assert!(entry.is_live(0));
        assert!(entry.is_live(9));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(json!("value"), 10);
        assert!(!entry.is_live(10), "Entry should be expired at boundary");
        assert!(!entry.is_live(11));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new(json!(1), 10);
        assert_eq!(entry.ttl_remaining(4), Some(6));
        assert_eq!(entry.ttl_remaining(10), None);
    }

    #[test]
    fn test_entry_live_again_if_clock_moves_back() {
        let entry = CacheEntry::new(json!(null), 0);
        assert!(!entry.is_live(0));
        assert!(entry.is_live(-1));
    }
}
