//! Null event dispatcher
//!
//! Discards every event. For tests and for hosts that want the capability
//! wired but inert.

use capdi_domain::error::Result;
use capdi_domain::ports::events::{AppEvent, EventDispatcher};
use tracing::trace;

/// Event dispatcher that drops everything on the floor
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventDispatcher;

impl NullEventDispatcher {
    /// Create a null dispatcher
    pub fn new() -> Self {
        Self
    }
}

impl EventDispatcher for NullEventDispatcher {
    fn dispatch(&self, event: AppEvent) -> Result<()> {
        trace!(name = %event.name, "discarding event");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_always_succeeds() {
        let dispatcher = NullEventDispatcher::new();
        assert!(dispatcher.dispatch(AppEvent::new("anything")).is_ok());
        assert_eq!(dispatcher.provider_name(), "null");
    }
}
