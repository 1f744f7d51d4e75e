//! # Capability Discovery - Domain Layer
//!
//! Core data structures and algorithms for discovering a working provider of
//! an abstract capability at runtime, without hard-coding which concrete
//! library supplies it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Discovery Pipeline                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  candidate table  →  CandidatesCollection (priority order)   │
//! │                              ↓                               │
//! │  AvailabilityProbe  →  resolve_first / resolve_all           │
//! │                              ↓                               │
//! │  CapabilityRegistry  →  override / singleton caching         │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`entity::CandidateEntity`] - immutable description of one provider
//! - [`collection::CandidatesCollection`] - ordered, deduplicated candidate list
//! - [`resolve`] - the resolution engine walking a collection in priority order
//! - [`registry::CapabilityRegistry`] - per-capability state machine with
//!   override precedence and singleton caching
//! - [`ports`] - boundary contracts: availability probing and the capability
//!   interfaces discovered instances must satisfy

/// Error handling types
pub mod error;

/// Immutable candidate description
pub mod entity;

/// Ordered, identifier-deduplicated candidate list
pub mod collection;

/// Resolution engine - availability check then build, in priority order
pub mod resolve;

/// Generic per-capability registry with override and singleton state
pub mod registry;

/// Boundary contracts between the discovery core and external layers
pub mod ports;

// Re-export the types nearly every consumer needs
pub use collection::CandidatesCollection;
pub use entity::{CandidateBuilder, CandidateEntity};
pub use error::{Error, Result};
pub use ports::availability::{AvailabilityProbe, VersionMatcher};
pub use registry::CapabilityRegistry;
pub use resolve::{Discovery, resolve_all, resolve_first};
