//! Key Validation Module

use crate::cache::RESERVED_KEY_CHARACTERS;
use crate::error::{CacheError, Result};

// == Validate Key ==
/// Rejects keys containing any of `{ } ( ) / \ @ :`.
///
/// The error reports the first reserved character found.
pub fn validate_key(key: &str) -> Result<()> {
    match key.chars().find(|c| RESERVED_KEY_CHARACTERS.contains(c)) {
        Some(character) => Err(CacheError::InvalidKey {
            key: key.to_string(),
            character,
        }),
        None => Ok(()),
    }
}
