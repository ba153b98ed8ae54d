//! Cache Module
//!
//! Provides the virtual-time cache, its TTL model and key validation.

mod clock;
mod dynamic;
mod entry;
mod interface;
mod key;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::VirtualClock;
pub use entry::CacheEntry;
pub use interface::SimpleCache;
pub use key::validate_key;
pub use store::MockCache;
pub use ttl::{Interval, Ttl};

// == Public Constants ==
/// Default TTL in seconds (one day)
pub const DEFAULT_TTL: i64 = 86_400;

/// Characters that may not appear in a cache key
pub const RESERVED_KEY_CHARACTERS: [char; 8] = ['{', '}', '(', ')', '/', '\\', '@', ':'];
