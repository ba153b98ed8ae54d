//! Loosely-typed JSON front
//!
//! Mirrors the cache contract for callers holding `serde_json::Value`s, such
//! as fixtures loaded from disk. Shape errors that the typed API rules out at
//! compile time surface here as `InvalidArgument` and `InvalidTtl`.

use serde_json::{Map, Value};

use crate::cache::store::validate_keys;
use crate::cache::{validate_key, MockCache, SimpleCache, Ttl};
use crate::error::{CacheError, Result};

/// Reads a JSON array of strings, rejecting any other shape.
fn key_list(keys: &Value) -> Result<Vec<&str>> {
    let items = keys
        .as_array()
        .ok_or_else(|| CacheError::InvalidArgument(format!("keys must be an array of strings, got {}", keys)))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| CacheError::InvalidArgument(format!("key must be a string, got {}", item)))
        })
        .collect()
}

impl MockCache {
    // == Get ==
    pub fn get_json(&self, key: &str, default: Value) -> Result<Value> {
        self.get(key, default)
    }

    // == Set ==
    /// Stores `value` with a TTL given as null, integer seconds or an ISO-8601 interval.
    pub fn set_json(&mut self, key: &str, value: &Value, ttl: &Value) -> Result<bool> {
        validate_key(key)?;
        let ttl = Ttl::from_json(ttl)?;
        self.set(key, value, ttl)
    }

    // == Get Multiple ==
    /// Looks up a JSON array of keys. The result map keeps the array's order.
    pub fn get_multiple_json(&self, keys: &Value, default: Value) -> Result<Map<String, Value>> {
        let keys = validate_keys(key_list(keys)?)?;
        keys.into_iter()
            .map(|key| {
                let value = self.get(&key, default.clone())?;
                Ok((key, value))
            })
            .collect()
    }

    // == Set Multiple ==
    /// Stores every member of a JSON object with the same TTL.
    pub fn set_multiple_json(&mut self, values: &Value, ttl: &Value) -> Result<bool> {
        let values = values
            .as_object()
            .ok_or_else(|| CacheError::InvalidArgument(format!("values must be an object, got {}", values)))?;
        validate_keys(values.keys())?;
        let ttl = Ttl::from_json(ttl)?;
        self.set_multiple(values, ttl)
    }

    // == Delete Multiple ==
    pub fn delete_multiple_json(&mut self, keys: &Value) -> Result<bool> {
        self.delete_multiple(key_list(keys)?)
    }
}
