//! Manifest availability probe
//!
//! Reads an installed-package manifest from disk: a flat JSON object mapping
//! package identifiers to installed versions.
//!
//! ```json
//! {
//!     "tokio": "1.47.1",
//!     "tracing": "0.1.41",
//!     "moka": "0.12.10"
//! }
//! ```
//!
//! A missing or malformed manifest is a hard error at construction time, a
//! deployment defect rather than a discovery outcome. Once loaded, lookups
//! are infallible map reads.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use capdi_domain::error::{Error, Result};
use capdi_domain::ports::availability::{AvailabilityProbe, VersionMatcher};
use tracing::debug;

use super::version::CaretMatcher;

/// Probe backed by an installed-package manifest file
pub struct ManifestProbe {
    installed: HashMap<String, String>,
    matcher: Arc<dyn VersionMatcher>,
}

impl ManifestProbe {
    /// Load a manifest from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::manifest_with_source(format!("failed to read manifest {}", path.display()), e)
        })?;
        let probe = Self::from_json(&raw)?;
        debug!(
            manifest = %path.display(),
            packages = probe.installed.len(),
            "loaded installed-package manifest"
        );
        Ok(probe)
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(raw: &str) -> Result<Self> {
        let installed: HashMap<String, String> = serde_json::from_str(raw).map_err(|e| {
            Error::manifest_with_source("manifest is not a JSON object of package versions", e)
        })?;
        Ok(Self {
            installed,
            matcher: Arc::new(CaretMatcher),
        })
    }

    /// Swap the constraint matcher
    pub fn with_matcher(mut self, matcher: Arc<dyn VersionMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Number of packages listed in the manifest
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    /// Whether the manifest lists no packages
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}

impl std::fmt::Debug for ManifestProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestProbe")
            .field("packages", &self.installed.len())
            .finish_non_exhaustive()
    }
}

impl AvailabilityProbe for ManifestProbe {
    fn is_available(&self, package: &str, versions: &str) -> bool {
        self.installed
            .get(package)
            .is_some_and(|installed| self.matcher.matches(installed, versions))
    }
}
