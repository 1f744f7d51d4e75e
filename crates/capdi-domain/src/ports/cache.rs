//! Key-value caching capability
//!
//! String-keyed, string-valued cache port. Providers decide eviction and
//! capacity policy; callers must treat every `get` as fallible.

/// Store-and-retrieve capability
pub trait CacheStore: Send + Sync {
    /// Fetch a value, `None` on miss or eviction
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous entry for the key
    fn put(&self, key: &str, value: String);

    /// Drop a key; absent keys are a no-op
    fn remove(&self, key: &str);

    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;
}
