//! Availability Probe Implementations
//!
//! The discovery core asks an `AvailabilityProbe` whether a candidate's
//! backing package can be loaded; these are the shipped answers.
//!
//! ## Available Probes
//!
//! | Probe | Type | Description |
//! |-------|------|-------------|
//! | StaticProbe | Deterministic | In-memory package map, for tests and closed-world hosts |
//! | ManifestProbe | Filesystem | Reads a JSON manifest of installed packages |
//!
//! Both delegate constraint matching to a [`VersionMatcher`]; the shipped
//! [`CaretMatcher`] understands the caret/wildcard/alternative grammar the
//! default candidate tables use.
//!
//! [`VersionMatcher`]: capdi_domain::ports::availability::VersionMatcher

pub mod manifest;
pub mod static_probe;
pub mod version;

pub use manifest::ManifestProbe;
pub use static_probe::StaticProbe;
pub use version::CaretMatcher;
