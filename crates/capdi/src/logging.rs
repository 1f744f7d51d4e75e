//! Structured logging with tracing
//!
//! Configures the tracing subscriber for hosts that do not bring their own.
//! The `CAPDI_LOG` environment variable overrides the configured level with
//! a full `EnvFilter` directive string.

use capdi_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging with the given default level
pub fn init_logging(level: &str) -> Result<()> {
    // Validate early so a typo is a configuration error, not silence
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_env("CAPDI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Configuration {
            message: format!("failed to initialize logging: {e}"),
            source: None,
        })?;

    info!("logging initialized with level: {}", level);
    Ok(())
}

/// Parse a log level string to a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_levels() {
        assert_eq!(parse_log_level("trace").expect("valid"), Level::TRACE);
        assert_eq!(parse_log_level("DEBUG").expect("valid"), Level::DEBUG);
        assert_eq!(parse_log_level("warning").expect("valid"), Level::WARN);
    }

    #[test]
    fn test_parse_invalid_level() {
        assert!(parse_log_level("verbose").is_err());
    }
}
