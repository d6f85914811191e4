//! Configuration for the counter store demo
//!
//! This crate provides:
//! - Configuration file discovery (`$COUNTER_STORE_CONFIG`, CWD, home directory)
//! - Application configuration (AppConfig)
//! - Platform directory for log files

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{load_config_file, CONFIG_ENV, CONFIG_FILE};
pub use paths::log_dir;
