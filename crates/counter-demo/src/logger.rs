//! File-based logging using simplelog
//!
//! One file per run, named after the store: `<store_name>-<timestamp>.log`.
//! Debug builds write to the current working directory, release builds to
//! [`counter_config::log_dir`].

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use counter_config::AppConfig;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_name(store_name: &str, started: DateTime<Local>) -> String {
    let prefix: String = store_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let prefix = if prefix.is_empty() { "store" } else { &prefix };
    format!("{}-{}.log", prefix, started.format("%Y%m%d-%H%M%S"))
}

fn log_file_path(store_name: &str) -> PathBuf {
    let filename = log_file_name(store_name, Local::now());

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        counter_config::log_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// `RUST_LOG` wins over the configured level; unknown names fall back to info
fn resolve_level(env_level: Option<&str>, configured: &str) -> LevelFilter {
    env_level
        .unwrap_or(configured)
        .trim()
        .parse()
        .unwrap_or(LevelFilter::Info)
}

/// Initialize file-based logging for the configured store
///
/// Returns the path to the log file.
pub fn init(config: &AppConfig) -> Result<PathBuf> {
    let log_file = log_file_path(&config.store_name);
    let env_level = std::env::var("RUST_LOG").ok();
    let level = resolve_level(env_level.as_deref(), &config.log_level);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    WriteLogger::init(level, log_config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name_uses_store_name() {
        let started = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(log_file_name("tally", started), "tally-20240309-140507.log");
        assert_eq!(
            log_file_name("my store/v2", started),
            "my-store-v2-20240309-140507.log"
        );
        assert_eq!(log_file_name("", started), "store-20240309-140507.log");
    }

    #[test]
    fn test_env_level_overrides_config() {
        assert_eq!(resolve_level(Some("trace"), "warn"), LevelFilter::Trace);
        assert_eq!(resolve_level(None, "warn"), LevelFilter::Warn);
        assert_eq!(resolve_level(None, "OFF"), LevelFilter::Off);
        assert_eq!(resolve_level(Some("loud"), "warn"), LevelFilter::Info);
    }
}
