//! Moka cache store
//!
//! Bounded concurrent cache with automatic eviction, backed by Moka's sync
//! cache.

use std::time::Duration;

use capdi_domain::ports::cache::CacheStore;
use moka::sync::Cache;

use crate::constants::CACHE_DEFAULT_CAPACITY;

/// Cache store backed by a bounded Moka cache
#[derive(Clone)]
pub struct MokaCacheStore {
    cache: Cache<String, String>,
    capacity: u64,
}

impl MokaCacheStore {
    /// Create a store with the default capacity (10k entries)
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_CAPACITY)
    }

    /// Create with a custom maximum entry count
    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(capacity).build();
        Self { cache, capacity }
    }

    /// Create with capacity and a time-to-live for entries
    pub fn with_ttl(capacity: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(time_to_live)
            .build();
        Self { cache, capacity }
    }

    /// Maximum entry count
    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MokaCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheStore")
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl CacheStore for MokaCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    fn put(&self, key: &str, value: String) {
        self.cache.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.cache.invalidate(key);
    }

    fn provider_name(&self) -> &'static str {
        "moka"
    }
}
