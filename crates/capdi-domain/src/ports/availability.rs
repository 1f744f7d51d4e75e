//! Availability probing port
//!
//! The resolution engine never inspects the environment itself; it asks an
//! [`AvailabilityProbe`]. Production probes inspect an installed-package
//! manifest; tests use a deterministic map. Version-constraint matching is
//! likewise delegated to a [`VersionMatcher`] so the core can treat
//! constraint strings opaquely.

/// Reports whether a candidate's backing package can be loaded in the
/// current environment.
///
/// Implementations must be fast, synchronous, in-process checks; the
/// resolution engine calls this once per candidate on every discovery.
pub trait AvailabilityProbe: Send + Sync {
    /// Whether `package` is present and an installed version satisfies the
    /// opaque constraint string `versions`.
    fn is_available(&self, package: &str, versions: &str) -> bool;
}

/// Decides whether an installed version satisfies a constraint string.
///
/// The constraint grammar is owned by the implementation; the discovery core
/// only passes constraints through. An unparsable constraint should be
/// treated as non-matching, never as an error.
pub trait VersionMatcher: Send + Sync {
    /// Whether `installed` satisfies `constraint`
    fn matches(&self, installed: &str, constraint: &str) -> bool;
}
