//! Keyed-collection rules: map key presence.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::codes;
use crate::foundation::{Error, RuleError, Validate};
use crate::message::templates;

/// Collections that can be probed for a key.
///
/// The seam that lets [`HasKey`]/[`NotHasKey`] work across map types
/// without committing the rule to one of them.
pub trait KeyedCollection {
    type Key;

    fn has_key(&self, key: &Self::Key) -> bool;
}

impl<K: Eq + Hash, V, S: BuildHasher> KeyedCollection for HashMap<K, V, S> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord, V> KeyedCollection for BTreeMap<K, V> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> KeyedCollection for IndexMap<K, V, S> {
    type Key = K;

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

/// Validates that a map contains a key.
pub struct HasKey<M: KeyedCollection> {
    key: M::Key,
}

impl<M: KeyedCollection> std::fmt::Debug for HasKey<M>
where
    M::Key: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HasKey").field("key", &self.key).finish()
    }
}

impl<M> Validate for HasKey<M>
where
    M: KeyedCollection,
    M::Key: Display,
{
    type Input = M;

    fn validate(&self, input: &M) -> Result<(), RuleError> {
        if input.has_key(&self.key) {
            Ok(())
        } else {
            Err(Error::new(codes::IS_CONTAINS_KEY, templates::IS_CONTAINS_KEY)
                .with_param("key", format!("\"{}\"", self.key))
                .into())
        }
    }
}

/// Validates that a map does not contain a key.
pub struct NotHasKey<M: KeyedCollection> {
    key: M::Key,
}

impl<M: KeyedCollection> std::fmt::Debug for NotHasKey<M>
where
    M::Key: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotHasKey").field("key", &self.key).finish()
    }
}

impl<M> Validate for NotHasKey<M>
where
    M: KeyedCollection,
    M::Key: Display,
{
    type Input = M;

    fn validate(&self, input: &M) -> Result<(), RuleError> {
        if input.has_key(&self.key) {
            Err(
                Error::new(codes::IS_NOT_CONTAINS_KEY, templates::IS_NOT_CONTAINS_KEY)
                    .with_param("key", format!("\"{}\"", self.key))
                    .into(),
            )
        } else {
            Ok(())
        }
    }
}

/// Map should contain `key`.
pub fn has_key<M: KeyedCollection>(key: M::Key) -> HasKey<M> {
    HasKey { key }
}

/// Map should not contain `key`.
pub fn not_has_key<M: KeyedCollection>(key: M::Key) -> NotHasKey<M> {
    NotHasKey { key }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_key_hashmap() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), 1);

        let rule: HasKey<HashMap<String, i32>> = has_key("name".to_string());
        assert!(rule.validate(&map).is_ok());

        let rule: HasKey<HashMap<String, i32>> = has_key("email".to_string());
        let err = rule.validate(&map).unwrap_err();
        match err {
            RuleError::Single(error) => {
                assert_eq!(error.code(), codes::IS_CONTAINS_KEY);
                assert_eq!(error.param("key"), Some("\"email\""));
            }
            RuleError::Nested(_) => panic!("expected single failure"),
        }
    }

    #[test]
    fn test_not_has_key() {
        let mut map = BTreeMap::new();
        map.insert("debug", true);

        let rule: NotHasKey<BTreeMap<&str, bool>> = not_has_key("release");
        assert!(rule.validate(&map).is_ok());

        let rule: NotHasKey<BTreeMap<&str, bool>> = not_has_key("debug");
        assert!(rule.validate(&map).is_err());
    }

    #[test]
    fn test_has_key_indexmap() {
        let mut map = IndexMap::new();
        map.insert("a", 1);
        let rule: HasKey<IndexMap<&str, i32>> = has_key("a");
        assert!(rule.validate(&map).is_ok());
    }
}
