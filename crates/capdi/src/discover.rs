//! Discovery facade
//!
//! One [`Discover`] instance aggregates a [`CapabilityRegistry`] per
//! supported capability, seeded from the default tables in
//! `capdi-providers`. It is an explicit object: construct one per process,
//! per tenant, or per test, and pass it by reference; there are no global
//! singletons.

use std::sync::Arc;

use capdi_domain::ports::availability::AvailabilityProbe;
use capdi_domain::ports::{CacheStore, EventDispatcher, Logger};
use capdi_domain::{CapabilityRegistry, Discovery, Result};
use capdi_providers::availability::{ManifestProbe, StaticProbe};
use capdi_providers::tables;
use tracing::{info, warn};

use crate::config::DiscoverConfig;

/// Capability name served by [`Discover::events`]
pub const CAPABILITY_EVENTS: &str = "events";
/// Capability name served by [`Discover::logging`]
pub const CAPABILITY_LOGGING: &str = "logging";
/// Capability name served by [`Discover::cache`]
pub const CAPABILITY_CACHE: &str = "cache";

/// Aggregate of per-capability registries sharing one availability probe.
pub struct Discover {
    events: CapabilityRegistry<dyn EventDispatcher>,
    logging: CapabilityRegistry<dyn Logger>,
    cache: CapabilityRegistry<dyn CacheStore>,
}

impl Discover {
    /// Create a facade over the default candidate tables.
    pub fn new(probe: Arc<dyn AvailabilityProbe>) -> Self {
        Self {
            events: CapabilityRegistry::new(
                CAPABILITY_EVENTS,
                Arc::clone(&probe),
                tables::event_dispatchers,
            ),
            logging: CapabilityRegistry::new(
                CAPABILITY_LOGGING,
                Arc::clone(&probe),
                tables::loggers,
            ),
            cache: CapabilityRegistry::new(CAPABILITY_CACHE, probe, tables::cache_stores),
        }
    }

    /// Create a facade from configuration.
    ///
    /// A configured manifest path selects a [`ManifestProbe`]; without one
    /// the facade starts from an empty [`StaticProbe`], i.e. nothing
    /// discoverable until candidates or instances are supplied explicitly.
    /// Configured preferences are applied to the matching registries.
    pub fn from_config(config: &DiscoverConfig) -> Result<Self> {
        let probe: Arc<dyn AvailabilityProbe> = match &config.manifest {
            Some(path) => Arc::new(ManifestProbe::from_path(path)?),
            None => Arc::new(StaticProbe::new()),
        };

        let discover = Self::new(probe);
        for (capability, package) in &config.prefer {
            discover.prefer(capability, package);
        }

        info!(
            preferences = config.prefer.len(),
            manifest = config.manifest.is_some(),
            "discovery facade configured"
        );
        Ok(discover)
    }

    /// Promote a candidate for a named capability.
    ///
    /// Unknown capability names are logged and ignored; unknown packages
    /// fall through to the registry's advisory no-op.
    pub fn prefer(&self, capability: &str, package: &str) {
        match capability {
            CAPABILITY_EVENTS => self.events.prefer(package),
            CAPABILITY_LOGGING => self.logging.prefer(package),
            CAPABILITY_CACHE => self.cache.prefer(package),
            other => warn!(capability = other, "preference for unknown capability ignored"),
        }
    }

    /// Restore every registry to its pristine lazily-seeded state
    pub fn reset(&self) {
        self.events.reset();
        self.logging.reset();
        self.cache.reset();
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Discover an event dispatcher (fresh resolution per call)
    pub fn event_dispatcher(&self) -> Option<Arc<dyn EventDispatcher>> {
        self.events.discover()
    }

    /// Every currently usable event dispatcher, in priority order
    pub fn event_dispatchers(&self) -> Vec<Discovery<dyn EventDispatcher>> {
        self.events.discoveries()
    }

    /// Registry access for add/prefer/set/use/singleton on events
    pub fn events(&self) -> &CapabilityRegistry<dyn EventDispatcher> {
        &self.events
    }

    // ========================================================================
    // Logging
    // ========================================================================

    /// Discover a logger (fresh resolution per call)
    pub fn logger(&self) -> Option<Arc<dyn Logger>> {
        self.logging.discover()
    }

    /// Every currently usable logger, in priority order
    pub fn loggers(&self) -> Vec<Discovery<dyn Logger>> {
        self.logging.discoveries()
    }

    /// Registry access for add/prefer/set/use/singleton on logging
    pub fn logging(&self) -> &CapabilityRegistry<dyn Logger> {
        &self.logging
    }

    // ========================================================================
    // Cache
    // ========================================================================

    /// Discover a cache store (fresh resolution per call)
    pub fn cache_store(&self) -> Option<Arc<dyn CacheStore>> {
        self.cache.discover()
    }

    /// Every currently usable cache store, in priority order
    pub fn cache_stores(&self) -> Vec<Discovery<dyn CacheStore>> {
        self.cache.discoveries()
    }

    /// Registry access for add/prefer/set/use/singleton on cache
    pub fn cache(&self) -> &CapabilityRegistry<dyn CacheStore> {
        &self.cache
    }
}

impl std::fmt::Debug for Discover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discover")
            .field("events", &self.events)
            .field("logging", &self.logging)
            .field("cache", &self.cache)
            .finish()
    }
}
