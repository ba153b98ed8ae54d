//! Standard cache contract
//!
//! The operations any simple key/value cache offers. Values cross the
//! boundary through serde, so callers keep ownership of their own objects.

use serde::{de::DeserializeOwned, Serialize};

use crate::cache::Ttl;
use crate::error::Result;

/// A simple key/value cache with per-entry TTL.
///
/// Every operation taking a key rejects reserved characters with
/// [`CacheError::InvalidKey`](crate::CacheError::InvalidKey). Batch operations
/// validate all of their input before changing anything.
pub trait SimpleCache {
    /// Returns the live value stored under `key`, or None if absent or expired.
    fn fetch<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    /// Returns the live value stored under `key`, or `default`.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        Ok(self.fetch(key)?.unwrap_or(default))
    }

    /// Stores a copy of `value`; `None` for `ttl` selects the default TTL.
    fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T, ttl: Option<Ttl>) -> Result<bool>;

    /// Removes `key`, returning whether it was stored.
    fn delete(&mut self, key: &str) -> Result<bool>;

    /// Removes every entry.
    fn clear(&mut self) -> bool;

    /// Looks up each key, substituting `default` for missing or expired ones.
    ///
    /// Results follow the iteration order of `keys`; a repeated key appears
    /// once, at its first position.
    fn get_multiple<I, K, T>(&self, keys: I, default: T) -> Result<Vec<(String, T)>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
        T: DeserializeOwned + Clone;

    /// Stores every pair with the same `ttl`.
    fn set_multiple<I, K, V>(&mut self, values: I, ttl: Option<Ttl>) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize;

    /// Removes every key.
    fn delete_multiple<I, K>(&mut self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>;

    /// Whether `key` holds a live value.
    fn has(&self, key: &str) -> Result<bool>;
}
