//! Boundary contracts between the discovery core and external layers
//!
//! Ports define the contracts that external layers implement, following the
//! Dependency Inversion Principle: the core names the interfaces, the
//! providers crate supplies the implementations.
//!
//! ## Organization
//!
//! - **availability** - the probe contract the resolution engine consults,
//!   plus the version-constraint matcher it delegates to
//! - **events / logging / cache** - the capability interfaces that discovered
//!   instances must satisfy

/// Availability probing and version-constraint matching
pub mod availability;

/// Event dispatching capability
pub mod events;

/// Leveled logging capability
pub mod logging;

/// Key-value caching capability
pub mod cache;

// Re-export commonly used port traits for convenience
pub use availability::{AvailabilityProbe, VersionMatcher};
pub use cache::CacheStore;
pub use events::{AppEvent, EventDispatcher};
pub use logging::{LogLevel, Logger};
