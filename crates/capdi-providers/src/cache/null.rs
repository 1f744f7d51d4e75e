//! Null cache store
//!
//! Accepts writes, never returns a hit. For tests and for disabling caching
//! without changing call sites.

use capdi_domain::ports::cache::CacheStore;

/// Cache store that always misses
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheStore;

impl NullCacheStore {
    /// Create a null store
    pub fn new() -> Self {
        Self
    }
}

impl CacheStore for NullCacheStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn put(&self, _key: &str, _value: String) {}

    fn remove(&self, _key: &str) {}

    fn provider_name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_misses() {
        let store = NullCacheStore::new();
        store.put("key", "value".to_string());
        assert!(store.get("key").is_none());
    }
}
