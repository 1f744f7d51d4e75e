//! Configuration loading
//!
//! Uses Figment to merge defaults, an optional TOML file, and prefixed
//! environment variables (later sources override earlier):
//!
//! 1. `DiscoverConfig::default()`
//! 2. `capdi.toml` (or an explicit path)
//! 3. `CAPDI_*` environment variables, `__` as the nesting separator
//!
//! ```toml
//! manifest = "capdi-manifest.json"
//! log_level = "debug"
//!
//! [prefer]
//! events = "tokio"
//! cache = "dashmap"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use capdi_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "capdi.toml";

/// Environment variable prefix
pub const CONFIG_ENV_PREFIX: &str = "CAPDI_";

/// Discovery facade configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverConfig {
    /// Path to the installed-package manifest; `None` means an empty
    /// closed-world probe
    pub manifest: Option<PathBuf>,

    /// Capability name to preferred package, applied after construction
    #[serde(default)]
    pub prefer: BTreeMap<String, String>,

    /// Log level for the tracing subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            prefer: BTreeMap::new(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path; falls back to `capdi.toml` in the working
    /// directory
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<DiscoverConfig> {
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));

        Figment::new()
            .merge(Serialized::defaults(DiscoverConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(&self.env_prefix).split("__"))
            .extract()
            .map_err(|e| Error::configuration_with_source("failed to load configuration", e))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiscoverConfig::default();
        assert!(config.manifest.is_none());
        assert!(config.prefer.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_from_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "capdi.toml",
                r#"
                    manifest = "providers.json"
                    log_level = "debug"

                    [prefer]
                    events = "tokio"
                    cache = "dashmap"
                "#,
            )?;

            let config = ConfigLoader::new().load().expect("config should load");
            assert_eq!(config.manifest.as_deref(), Some(Path::new("providers.json")));
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.prefer.get("events").map(String::as_str), Some("tokio"));
            assert_eq!(config.prefer.get("cache").map(String::as_str), Some("dashmap"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("capdi.toml", r#"log_level = "debug""#)?;
            jail.set_env("CAPDI_LOG_LEVEL", "trace");
            jail.set_env("CAPDI_PREFER__EVENTS", "null");

            let config = ConfigLoader::new().load().expect("config should load");
            assert_eq!(config.log_level, "trace");
            assert_eq!(config.prefer.get("events").map(String::as_str), Some("null"));
            Ok(())
        });
    }
}
