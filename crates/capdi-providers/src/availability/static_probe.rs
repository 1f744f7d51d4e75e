//! Static availability probe
//!
//! Deterministic probe backed by an in-memory package map. The default for
//! tests, and for hosts that know their closed world up front.

use std::collections::HashMap;
use std::sync::Arc;

use capdi_domain::ports::availability::{AvailabilityProbe, VersionMatcher};

use super::version::CaretMatcher;

/// Probe answering from a fixed map of installed packages.
///
/// # Example
///
/// ```
/// use capdi_providers::availability::StaticProbe;
/// use capdi_domain::ports::availability::AvailabilityProbe;
///
/// let probe = StaticProbe::new()
///     .with_package("tokio", "1.47.0")
///     .with_package("tracing", "0.1.41");
///
/// assert!(probe.is_available("tokio", "^1.38"));
/// assert!(!probe.is_available("moka", "^0.12"));
/// ```
pub struct StaticProbe {
    installed: HashMap<String, String>,
    matcher: Arc<dyn VersionMatcher>,
}

impl StaticProbe {
    /// Create an empty probe: nothing is available until packages are added
    pub fn new() -> Self {
        Self {
            installed: HashMap::new(),
            matcher: Arc::new(CaretMatcher),
        }
    }

    /// Mark a package as installed at the given version
    pub fn with_package(mut self, package: impl Into<String>, version: impl Into<String>) -> Self {
        self.installed.insert(package.into(), version.into());
        self
    }

    /// Swap the constraint matcher
    pub fn with_matcher(mut self, matcher: Arc<dyn VersionMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Number of packages the probe knows about
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    /// Whether the probe knows no packages at all
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}

impl Default for StaticProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StaticProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticProbe")
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}

impl AvailabilityProbe for StaticProbe {
    fn is_available(&self, package: &str, versions: &str) -> bool {
        self.installed
            .get(package)
            .is_some_and(|installed| self.matcher.matches(installed, versions))
    }
}
