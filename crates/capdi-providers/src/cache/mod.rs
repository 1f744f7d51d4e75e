//! Cache Store Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | MokaCacheStore | Production | Bounded concurrent cache with eviction |
//! | InMemoryCacheStore | Simple | Unbounded dashmap-backed store |
//! | NullCacheStore | Testing | Always misses |
//!
//! ## Provider Selection Guide
//!
//! - **Testing**: use `NullCacheStore` so nothing is ever cached
//! - **Small working sets**: use `InMemoryCacheStore`
//! - **Bounded memory**: use `MokaCacheStore` (feature `cache-moka`)

pub mod memory;
#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

pub use memory::InMemoryCacheStore;
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheStore;
pub use null::NullCacheStore;

// Re-export port trait from the domain layer
pub use capdi_domain::ports::cache::CacheStore;
