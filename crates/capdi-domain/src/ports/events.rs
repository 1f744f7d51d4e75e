//! Event dispatching capability
//!
//! The abstract interface behind which event-dispatcher providers are
//! discovered. Dispatch is synchronous and fire-and-forget; whether anyone
//! is listening is a provider concern.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// An application event: a name plus an arbitrary JSON payload.
///
/// # Example
///
/// ```
/// use capdi_domain::ports::events::AppEvent;
///
/// let event = AppEvent::new("user.created")
///     .with_payload(serde_json::json!({ "id": 42 }));
/// assert_eq!(event.name, "user.created");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppEvent {
    /// Event name, dot-separated by convention
    pub name: String,
    /// Arbitrary structured payload
    pub payload: Value,
}

impl AppEvent {
    /// Create an event with a null payload
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Value::Null,
        }
    }

    /// Attach a structured payload
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

/// Dispatch-an-event capability
pub trait EventDispatcher: Send + Sync {
    /// Deliver an event to whoever is listening.
    ///
    /// Having no listeners is not an error.
    fn dispatch(&self, event: AppEvent) -> Result<()>;

    /// Provider name for diagnostics
    fn provider_name(&self) -> &'static str;
}
