//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the virtual-time expiration model.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{MockCache, SimpleCache, Ttl, RESERVED_KEY_CHARACTERS};
use crate::error::CacheError;

// == Test Configuration ==
const TEST_DEFAULT_TTL: i64 = 300;

// == Strategies ==
/// Generates valid cache keys (no reserved characters)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,32}"
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

/// Generates keys guaranteed to contain one reserved character
fn invalid_key_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z]{0,8}",
        prop::sample::select(RESERVED_KEY_CHARACTERS.to_vec()),
        "[a-z]{0,8}",
    )
        .prop_map(|(prefix, c, suffix)| format!("{}{}{}", prefix, c, suffix))
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl: i64 },
    Delete { key: String },
    Advance { seconds: i64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    let key = prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(String::from);
    prop_oneof![
        (key.clone(), valid_value_strategy(), -5i64..20)
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        key.prop_map(|key| CacheOp::Delete { key }),
        (0i64..10).prop_map(|seconds| CacheOp::Advance { seconds }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Property: Round-trip before default expiry
    // A value stored without TTL reads back unchanged until the default TTL elapses.
    #[test]
    fn prop_roundtrip_until_default_ttl(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        elapsed in 0i64..TEST_DEFAULT_TTL
    ) {
        let mut cache = MockCache::with_default_ttl(TEST_DEFAULT_TTL);
        cache.set(&key, &value, None).unwrap();

        cache.advance_time(elapsed);
        prop_assert_eq!(cache.fetch::<String>(&key).unwrap(), Some(value));

        cache.advance_time(TEST_DEFAULT_TTL - elapsed);
        prop_assert_eq!(cache.fetch::<String>(&key).unwrap(), None);
    }

    // Property: Strict expiration boundary
    // With ttl N the entry is live at N-1 and gone at N.
    #[test]
    fn prop_strict_expiration_boundary(
        key in valid_key_strategy(),
        start in -1000i64..1000,
        ttl in 1i64..10_000
    ) {
        let mut cache = MockCache::new();
        cache.advance_time(start);
        cache.set(&key, "value", Some(Ttl::Seconds(ttl))).unwrap();

        cache.advance_time(ttl - 1);
        prop_assert!(cache.has(&key).unwrap());

        cache.advance_time(1);
        prop_assert!(!cache.has(&key).unwrap());
        prop_assert_eq!(cache.get(&key, "fallback".to_string()).unwrap(), "fallback");
    }

    // Property: Non-positive TTL is never observable
    #[test]
    fn prop_non_positive_ttl_is_expired(key in valid_key_strategy(), ttl in -10_000i64..=0) {
        let mut cache = MockCache::new();
        cache.set(&key, "value", Some(Ttl::Seconds(ttl))).unwrap();

        prop_assert!(!cache.has(&key).unwrap());
        prop_assert_eq!(cache.fetch::<String>(&key).unwrap(), None);
    }

    // Property: Delete removes entry
    // The first delete reports true, later ones false, and the key reads as absent.
    #[test]
    fn prop_delete_removes_entry(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut cache = MockCache::new();
        cache.set(&key, &value, None).unwrap();

        prop_assert!(cache.delete(&key).unwrap());
        prop_assert!(!cache.delete(&key).unwrap());
        prop_assert!(!cache.has(&key).unwrap());
        prop_assert_eq!(cache.get(&key, "default".to_string()).unwrap(), "default");
    }

    // Property: Model agreement
    // Any sequence of set/delete/advance matches a simple reference model.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache = MockCache::with_default_ttl(TEST_DEFAULT_TTL);
        let mut model: HashMap<String, (String, i64)> = HashMap::new();
        let mut now = 0i64;

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => {
                    cache.set(&key, &value, Some(Ttl::Seconds(ttl))).unwrap();
                    model.insert(key, (value, now + ttl));
                }
                CacheOp::Delete { key } => {
                    let existed = cache.delete(&key).unwrap();
                    prop_assert_eq!(existed, model.remove(&key).is_some());
                }
                CacheOp::Advance { seconds } => {
                    cache.advance_time(seconds);
                    now += seconds;
                }
            }

            for key in ["a", "b", "c", "d"] {
                let expected = model
                    .get(key)
                    .filter(|(_, expires_at)| now < *expires_at)
                    .map(|(value, _)| value.clone());
                prop_assert_eq!(cache.fetch::<String>(key).unwrap(), expected);
            }
        }

        prop_assert_eq!(cache.len(), model.len());
    }

    // Property: Reserved characters are rejected by every keyed operation
    #[test]
    fn prop_invalid_keys_rejected(key in invalid_key_strategy()) {
        let mut cache = MockCache::new();

        prop_assert!(matches!(cache.fetch::<String>(&key), Err(CacheError::InvalidKey { .. })), "fetch");
        prop_assert!(matches!(cache.set(&key, "v", None), Err(CacheError::InvalidKey { .. })), "set");
        prop_assert!(matches!(cache.delete(&key), Err(CacheError::InvalidKey { .. })), "delete");
        prop_assert!(matches!(cache.has(&key), Err(CacheError::InvalidKey { .. })), "has");
        prop_assert!(
            matches!(cache.get_multiple(["ok", key.as_str()], 0), Err(CacheError::InvalidKey { .. })),
            "get_multiple"
        );
        prop_assert!(
            matches!(cache.set_multiple([("ok", 1), (key.as_str(), 2)], None), Err(CacheError::InvalidKey { .. })),
            "set_multiple"
        );
        prop_assert!(
            matches!(cache.delete_multiple([key.as_str()]), Err(CacheError::InvalidKey { .. })),
            "delete_multiple"
        );
        prop_assert!(cache.is_empty());
    }

    // Property: Clear empties everything
    #[test]
    fn prop_clear_removes_all(keys in prop::collection::hash_set(valid_key_strategy(), 0..20)) {
        let mut cache = MockCache::new();
        for key in &keys {
            cache.set(key, key, None).unwrap();
        }

        prop_assert!(cache.clear());
        for key in &keys {
            prop_assert!(!cache.has(key).unwrap());
        }
        prop_assert!(cache.is_empty());
    }
}
