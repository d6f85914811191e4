//! Application configuration
//!
//! Configuration loaded from .counter-store.toml.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .counter-store.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name used to prefix the store's log lines
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Log every dispatched action at debug level
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,

    /// Count the store starts from
    #[serde(default)]
    pub initial_count: i64,

    /// Log level for the demo's log file (`off`, `error`, ... `trace`)
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_store_name() -> String {
    "counter".to_string()
}

fn default_log_actions() -> bool {
    true
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            log_actions: default_log_actions(),
            initial_count: 0,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store_name, "counter");
        assert!(config.log_actions);
        assert_eq!(config.initial_count, 0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            store_name = "tally"
            log_actions = false
            initial_count = 12
            log_level = "warn"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.store_name, "tally");
        assert!(!config.log_actions);
        assert_eq!(config.initial_count, 12);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            initial_count = -4
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.initial_count, -4);
        // Other fields should use defaults
        assert_eq!(config.store_name, "counter");
        assert!(config.log_actions);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_config_invalid_type_is_error() {
        let err = AppConfig::from_toml(r#"initial_count = "ten""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
