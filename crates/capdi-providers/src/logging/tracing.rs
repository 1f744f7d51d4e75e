//! Tracing-backed logger
//!
//! Forwards discovered-capability log calls into the tracing ecosystem, so
//! whatever subscriber the host installed sees them.

use capdi_domain::ports::logging::{LogLevel, Logger};
use tracing::{debug, error, info, trace, warn};

/// Logger that emits tracing events at the corresponding level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a tracing logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => trace!("{message}"),
            LogLevel::Debug => debug!("{message}"),
            LogLevel::Info => info!("{message}"),
            LogLevel::Warn => warn!("{message}"),
            LogLevel::Error => error!("{message}"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "tracing"
    }
}
