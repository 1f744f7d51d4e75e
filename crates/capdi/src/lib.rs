//! # capdi - Capability Discovery
//!
//! Obtain a working implementation of an abstract capability (an event
//! dispatcher, a logger, a cache) without hard-coding which concrete library
//! provides it. Each capability has an ordered candidate table; discovery
//! walks it, checks availability against a probe, and instantiates the first
//! usable candidate. Callers can prefer a candidate, inject their own
//! instance, or replace the table entirely.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use capdi::{Discover, StaticProbe};
//!
//! let probe = Arc::new(StaticProbe::new().with_package("tokio", "1.47.0"));
//! let discover = Discover::new(probe);
//!
//! if let Some(dispatcher) = discover.event_dispatcher() {
//!     dispatcher.dispatch(capdi::AppEvent::new("app.started"))?;
//! }
//!
//! // Promote another candidate, then re-resolve
//! discover.events().prefer("null");
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a domain / providers / facade split:
//!
//! - `capdi-domain` - candidate entities, collections, the resolution
//!   engine, and the generic per-capability registry
//! - `capdi-providers` - availability probes, provider implementations, and
//!   the default candidate tables
//! - `capdi` (this crate) - the `Discover` facade, configuration loading,
//!   and logging setup

/// Discovery facade aggregating one registry per capability
pub mod discover;

/// Configuration loading (TOML file plus environment overrides)
pub mod config;

/// Structured logging setup with tracing
pub mod logging;

/// Domain layer - discovery core and capability ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use capdi_domain::*;
}

/// Provider layer - probes, backends, and candidate tables
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use capdi_providers::*;
}

// The types nearly every consumer touches
pub use capdi_domain::ports::{AppEvent, CacheStore, EventDispatcher, LogLevel, Logger};
pub use capdi_domain::{
    CandidateEntity, CandidatesCollection, CapabilityRegistry, Discovery, Error, Result,
};
pub use capdi_providers::availability::{CaretMatcher, ManifestProbe, StaticProbe};
pub use config::DiscoverConfig;
pub use discover::Discover;
