//! Configuration Module
//!
//! Construction-time settings for the mock cache.

use crate::cache::DEFAULT_TTL;

/// Cache configuration parameters.
///
/// Values are fixed when the cache is built; there is no environment or file loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Default TTL in seconds for entries stored without an explicit TTL
    pub default_ttl: i64,
}

impl CacheConfig {
    /// Creates a config with the given default TTL in seconds.
    pub fn new(default_ttl: i64) -> Self {
        Self { default_ttl }
    }

    /// Returns a copy of this config with a different default TTL.
    pub fn with_default_ttl(mut self, default_ttl: i64) -> Self {
        self.default_ttl = default_ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
        }
    }
}
