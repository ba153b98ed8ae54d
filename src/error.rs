//! Error types for the mock cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Every variant is a validation failure; the cache performs no I/O.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key contains a reserved character
    #[error("invalid character in key {key:?}: {character}")]
    InvalidKey { key: String, character: char },

    /// TTL is neither an integer, an interval, nor null
    #[error("invalid TTL: {0}")]
    InvalidTtl(String),

    /// Batch input does not have the expected shape
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Value could not be converted to or from its stored form
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
