//! Logger Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | TracingLogger | Production | Forwards to the tracing ecosystem |
//! | NullLogger | Testing | Discards all records |

pub mod null;
pub mod tracing;

pub use null::NullLogger;
pub use tracing::TracingLogger;

// Re-export port types from the domain layer
pub use capdi_domain::ports::logging::{LogLevel, Logger};
