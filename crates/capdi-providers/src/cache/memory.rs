//! In-memory cache store
//!
//! Unbounded concurrent map. No eviction: suitable for small working sets
//! and tests, not for long-lived processes with open-ended key spaces.

use capdi_domain::ports::cache::CacheStore;
use dashmap::DashMap;

/// Cache store backed by a concurrent hash map
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: DashMap<String, String>,
}

impl InMemoryCacheStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    fn provider_name(&self) -> &'static str {
        "dashmap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = InMemoryCacheStore::new();
        store.put("greeting", "hello".to_string());

        assert_eq!(store.get("greeting").as_deref(), Some("hello"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_put_replaces_existing() {
        let store = InMemoryCacheStore::new();
        store.put("key", "one".to_string());
        store.put("key", "two".to_string());

        assert_eq!(store.get("key").as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let store = InMemoryCacheStore::new();
        store.put("key", "value".to_string());
        store.remove("key");
        store.remove("already-gone");

        assert!(store.get("key").is_none());
        assert!(store.is_empty());
    }
}
