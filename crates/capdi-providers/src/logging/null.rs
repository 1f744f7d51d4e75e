//! Null logger

use capdi_domain::ports::logging::{LogLevel, Logger};

/// Logger that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Create a null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}

    fn provider_name(&self) -> &'static str {
        "null"
    }
}
