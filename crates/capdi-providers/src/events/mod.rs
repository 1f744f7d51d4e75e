//! Event Dispatcher Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | BroadcastEventDispatcher | In-Process | Tokio broadcast channels |
//! | NullEventDispatcher | Testing | Discards all events |
//!
//! ## Provider Selection Guide
//!
//! - **Testing**: use `NullEventDispatcher` to discard events
//! - **Single process**: use `BroadcastEventDispatcher` for in-process fan-out

pub mod broadcast;
pub mod null;

pub use broadcast::BroadcastEventDispatcher;
pub use null::NullEventDispatcher;

// Re-export port types from the domain layer
pub use capdi_domain::ports::events::{AppEvent, EventDispatcher};
