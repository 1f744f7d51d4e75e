//! Resolution engine
//!
//! Walks a [`CandidatesCollection`] in priority order. Each candidate must
//! pass two independent gates to count: the availability probe says its
//! backing package is loadable, and its builder succeeds. A package can be
//! present but misconfigured, so both gates are required.
//!
//! Partial failure is deliberate policy: a broken or partially-installed
//! provider must never block discovery of a working alternative. Skips are
//! traced, not surfaced; "nothing found" is `None`, not an error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::collection::CandidatesCollection;
use crate::ports::availability::AvailabilityProbe;

/// One successfully resolved candidate: the winning package identifier
/// paired with the built capability instance.
pub struct Discovery<T: ?Sized> {
    package: String,
    instance: Arc<T>,
}

impl<T: ?Sized> Discovery<T> {
    /// Create a discovery result
    pub fn new(package: impl Into<String>, instance: Arc<T>) -> Self {
        Self {
            package: package.into(),
            instance,
        }
    }

    /// Package identifier of the winning candidate
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Shared handle to the built instance
    pub fn instance(&self) -> Arc<T> {
        Arc::clone(&self.instance)
    }

    /// Consume the discovery, keeping only the instance
    pub fn into_instance(self) -> Arc<T> {
        self.instance
    }
}

impl<T: ?Sized> Clone for Discovery<T> {
    fn clone(&self) -> Self {
        Self {
            package: self.package.clone(),
            instance: Arc::clone(&self.instance),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Discovery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discovery")
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}

/// Resolve the first usable candidate in priority order.
///
/// Returns `None` when no candidate passes both gates; callers must handle
/// absence as a first-class outcome.
pub fn resolve_first<T: ?Sized>(
    candidates: &CandidatesCollection<T>,
    probe: &dyn AvailabilityProbe,
) -> Option<Discovery<T>> {
    for entity in candidates.iter() {
        if !probe.is_available(entity.package(), entity.versions()) {
            debug!(
                package = entity.package(),
                versions = entity.versions(),
                "candidate not available, skipping"
            );
            continue;
        }

        match entity.build() {
            Ok(instance) => {
                debug!(package = entity.package(), "candidate resolved");
                return Some(Discovery::new(entity.package(), instance));
            }
            Err(reason) => {
                warn!(
                    package = entity.package(),
                    %reason,
                    "candidate builder failed, skipping"
                );
            }
        }
    }

    None
}

/// Resolve every usable candidate, in priority order.
///
/// Does not stop at the first success: this reports everything currently
/// usable, not just the preferred provider. Candidates whose availability
/// check or build fails are excluded.
pub fn resolve_all<T: ?Sized>(
    candidates: &CandidatesCollection<T>,
    probe: &dyn AvailabilityProbe,
) -> Vec<Discovery<T>> {
    let mut discoveries = Vec::new();

    for entity in candidates.iter() {
        if !probe.is_available(entity.package(), entity.versions()) {
            debug!(
                package = entity.package(),
                versions = entity.versions(),
                "candidate not available, skipping"
            );
            continue;
        }

        match entity.build() {
            Ok(instance) => discoveries.push(Discovery::new(entity.package(), instance)),
            Err(reason) => {
                warn!(
                    package = entity.package(),
                    %reason,
                    "candidate builder failed, skipping"
                );
            }
        }
    }

    discoveries
}
