//! Config file discovery
//!
//! Lookup order: `$COUNTER_STORE_CONFIG`, then `.counter-store.toml` in the CWD,
//! then the same file in the home directory.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs};

/// Config file name, looked up in the CWD and the home directory
pub const CONFIG_FILE: &str = ".counter-store.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "COUNTER_STORE_CONFIG";

/// Config file locations in lookup order
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = env::var_os(CONFIG_ENV) {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from(CONFIG_FILE));
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

/// Read the first candidate that exists
///
/// Missing files are skipped silently, unreadable ones with a warning.
pub fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates
        .iter()
        .find_map(|path| match fs::read_to_string(path) {
            Ok(content) => Some((path.clone(), content)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Skipping config {}: {}", path.display(), e);
                None
            }
        })
}

/// Load the first config file found, returning its path and content
pub fn load_config_file() -> Option<(PathBuf, String)> {
    read_first(&config_candidates())
}
