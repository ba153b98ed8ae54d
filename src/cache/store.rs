//! Cache Store Module
//!
//! The mock cache: a HashMap of entries checked lazily against a virtual clock.

use std::collections::{HashMap, HashSet};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::{validate_key, CacheEntry, SimpleCache, Ttl, VirtualClock, DEFAULT_TTL};
use crate::config::CacheConfig;
use crate::error::Result;

// == Mock Cache ==
/// In-memory cache whose notion of time only moves via [`MockCache::advance_time`].
///
/// Expired entries stay in the map until overwritten, deleted or cleared;
/// reads simply treat them as absent. Not safe for production use.
#[derive(Debug, Clone)]
pub struct MockCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Current virtual time
    clock: VirtualClock,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: i64,
}

impl MockCache {
    // == Constructors ==
    /// Creates an empty cache with a one-day default TTL.
    pub fn new() -> Self {
        Self::from_config(&CacheConfig::default())
    }

    /// Creates an empty cache with the given default TTL in seconds.
    pub fn with_default_ttl(default_ttl: i64) -> Self {
        Self::from_config(&CacheConfig::new(default_ttl))
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            clock: VirtualClock::new(),
            default_ttl: config.default_ttl,
        }
    }

    // == Virtual Time ==
    /// Moves the virtual clock by `seconds`.
    ///
    /// Entries are not touched; expiry is re-evaluated on the next read, so
    /// moving the clock backward can make an expired entry readable again.
    ///
    /// # Arguments
    /// * `seconds` - Amount to move the clock; negative values move it backward
    pub fn advance_time(&mut self, seconds: i64) {
        self.clock.advance(seconds);
        debug!(seconds, now = self.clock.now(), "advanced virtual clock");
    }

    /// Current virtual instant in seconds.
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    pub fn default_ttl(&self) -> i64 {
        self.default_ttl
    }

    // == Introspection ==
    /// Number of physically stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expiration instant of a live entry.
    pub fn expires_at(&self, key: &str) -> Result<Option<i64>> {
        validate_key(key)?;
        Ok(self.live_entry(key).map(|entry| entry.expires_at))
    }

    /// Seconds until a live entry expires.
    pub fn ttl_remaining(&self, key: &str) -> Result<Option<i64>> {
        validate_key(key)?;
        let now = self.clock.now();
        Ok(self.entries.get(key).and_then(|entry| entry.ttl_remaining(now)))
    }

    // == Internal Helpers ==
    pub(crate) fn live_entry(&self, key: &str) -> Option<&CacheEntry> {
        let now = self.clock.now();
        self.entries.get(key).filter(|entry| entry.is_live(now))
    }

    /// Resolves an optional TTL to an absolute instant on the virtual clock.
    pub(crate) fn resolve_expiry(&self, ttl: Option<Ttl>) -> Result<i64> {
        let ttl = ttl.unwrap_or(Ttl::Seconds(self.default_ttl));
        ttl.expires_at(self.clock.now())
    }

    pub(crate) fn insert(&mut self, key: String, value: Value, expires_at: i64) {
        debug!(key = %key, expires_at, now = self.clock.now(), "stored entry");
        self.entries.insert(key, CacheEntry::new(value, expires_at));
    }

    pub(crate) fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        debug!(key, removed, "deleted entry");
        removed
    }
}

impl Default for MockCache {
    fn default() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }
}

/// Validates every key up front, so batch operations never partially apply.
pub(crate) fn validate_keys<I, K>(keys: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .map(|key| {
            let key = key.as_ref();
            validate_key(key)?;
            Ok(key.to_string())
        })
        .collect()
}

impl SimpleCache for MockCache {
    // == Get ==
    fn fetch<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        validate_key(key)?;
        let hit = self.live_entry(key);
        trace!(key, hit = hit.is_some(), now = self.clock.now(), "read entry");
        hit.map(|entry| serde_json::from_value::<T>(entry.value.clone()))
            .transpose()
            .map_err(Into::into)
    }

    // == Set ==
    /// Stores a serialized copy of `value`, overwriting any previous entry.
    ///
    /// # Arguments
    /// * `key` - The key to store; reserved characters are rejected
    /// * `value` - The value to copy into the cache
    /// * `ttl` - Seconds or interval from now (uses default_ttl if None)
    ///
    /// # Returns
    /// Always `true` once stored. Key and TTL errors are returned before
    /// anything changes.
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T, ttl: Option<Ttl>) -> Result<bool> {
        validate_key(key)?;
        let expires_at = self.resolve_expiry(ttl)?;
        let value = serde_json::to_value(value)?;
        self.insert(key.to_string(), value, expires_at);
        Ok(true)
    }

    // == Delete ==
    fn delete(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.remove(key))
    }

    // == Clear ==
    fn clear(&mut self) -> bool {
        debug!(entries = self.entries.len(), "cleared cache");
        self.entries.clear();
        true
    }

    // == Get Multiple ==
    fn get_multiple<I, K, T>(&self, keys: I, default: T) -> Result<Vec<(String, T)>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
        T: DeserializeOwned + Clone,
    {
        let mut seen = HashSet::new();
        validate_keys(keys)?
            .into_iter()
            .filter(|key| seen.insert(key.clone()))
            .map(|key| {
                let value = self.get(&key, default.clone())?;
                Ok((key, value))
            })
            .collect()
    }

    // == Set Multiple ==
    fn set_multiple<I, K, V>(&mut self, values: I, ttl: Option<Ttl>) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize,
    {
        let pending = values
            .into_iter()
            .map(|(key, value)| {
                let key = key.as_ref();
                validate_key(key)?;
                Ok((key.to_string(), serde_json::to_value(value)?))
            })
            .collect::<Result<Vec<_>>>()?;
        let expires_at = self.resolve_expiry(ttl)?;

        for (key, value) in pending {
            self.insert(key, value, expires_at);
        }
        Ok(true)
    }

    // == Delete Multiple ==
    fn delete_multiple<I, K>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in validate_keys(keys)? {
            self.remove(&key);
        }
        Ok(true)
    }

    // == Has ==
    fn has(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.live_entry(key).is_some())
    }
}
