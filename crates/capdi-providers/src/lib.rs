//! # Capability Discovery - Provider Implementations
//!
//! Concrete providers for the capability ports defined in `capdi-domain`,
//! the availability probes the resolution engine consults, and the default
//! candidate tables wiring the two together.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Events | `EventDispatcher` | Broadcast (tokio), Null |
//! | Logging | `Logger` | Tracing, Null |
//! | Cache | `CacheStore` | Moka, InMemory (dashmap), Null |
//! | Availability | `AvailabilityProbe` | Static, Manifest |
//!
//! ## Feature Flags
//!
//! Heavier backends can be disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! capdi-providers = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use capdi_providers::availability::StaticProbe;
//! use capdi_providers::tables;
//!
//! let probe = Arc::new(StaticProbe::new().with_package("tokio", "1.47.0"));
//! let registry = CapabilityRegistry::new("events", probe, tables::event_dispatchers);
//! ```

// Re-export capdi-domain types commonly used with providers
pub use capdi_domain::error::{Error, Result};
pub use capdi_domain::ports::{
    AppEvent, AvailabilityProbe, CacheStore, EventDispatcher, LogLevel, Logger, VersionMatcher,
};

/// Provider-specific constants
pub mod constants;

/// Availability probes and version-constraint matching
pub mod availability;

/// Event dispatcher implementations
///
/// Implements the `EventDispatcher` port for in-process event delivery.
pub mod events;

/// Logger implementations
///
/// Implements the `Logger` port.
pub mod logging;

/// Cache store implementations
///
/// Implements the `CacheStore` port for key-value caching backends.
pub mod cache;

/// Default candidate tables, one per capability
pub mod tables;
