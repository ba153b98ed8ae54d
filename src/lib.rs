//! Mock Cache - an in-memory key/value cache driven by a virtual clock
//!
//! Time only moves when a test calls [`MockCache::advance_time`], so expiration
//! can be exercised without sleeping. Not meant for production use: there are
//! no size limits, no eviction and no background sweeping.
//!
//! ```
//! use mock_cache::{MockCache, SimpleCache, Ttl};
//!
//! let mut cache = MockCache::new();
//! cache.set("token", &"abc", Some(Ttl::Seconds(10))).unwrap();
//!
//! cache.advance_time(9);
//! assert_eq!(cache.fetch::<String>("token").unwrap().as_deref(), Some("abc"));
//!
//! cache.advance_time(1);
//! assert!(!cache.has("token").unwrap());
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Interval, MockCache, SimpleCache, Ttl};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
