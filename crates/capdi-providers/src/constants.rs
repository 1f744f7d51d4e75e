//! Provider Constants
//!
//! Constants specific to provider implementations. Discovery-core semantics
//! live in `capdi-domain`; everything here tunes concrete backends.

// ============================================================================
// EVENT DISPATCHER CONSTANTS
// ============================================================================

/// Default broadcast channel capacity for the in-process event dispatcher
pub const EVENTS_DEFAULT_CAPACITY: usize = 1024;

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default maximum entry count for cache providers
pub const CACHE_DEFAULT_CAPACITY: u64 = 10_000;

// ============================================================================
// AVAILABILITY CONSTANTS
// ============================================================================

/// Constraint that matches any installed version
pub const CONSTRAINT_ANY: &str = "*";
