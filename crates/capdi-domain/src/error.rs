//! Error handling types
//!
//! Discovery outcomes are never errors: a candidate that is missing or fails
//! to build is skipped, and "nothing found" surfaces as `None`. The variants
//! here cover the genuinely unexpected failures - unreadable manifests,
//! malformed configuration - which indicate a defect rather than an
//! environment condition.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for capability discovery
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Installed-package manifest could not be read or parsed
    #[error("Manifest error: {message}")]
    Manifest {
        /// Description of the manifest error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a manifest error with source
    pub fn manifest_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Manifest {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
