//! Default Candidate Tables
//!
//! One ordered table per capability, mapping backing packages to builders.
//! Table order is the priority signal: the first entry whose package is
//! available wins. Registries consume these as seed closures and memoize
//! the result, so each table function runs at most once per registry.
//!
//! ## Usage
//!
//! ```ignore
//! use capdi_domain::CapabilityRegistry;
//! use capdi_providers::tables;
//!
//! let registry = CapabilityRegistry::new("events", probe, tables::event_dispatchers);
//! ```

pub mod cache;
pub mod events;
pub mod logging;

pub use cache::cache_stores;
pub use events::event_dispatchers;
pub use logging::loggers;
