//! Where the demo writes its files

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "counter-store";

/// Directory for log files of release builds, created on demand
///
/// Uses the platform state directory (`~/.local/state/counter-store/logs` on Linux)
/// and falls back to the cache directory where there is none (macOS, Windows).
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .context("Could not determine a directory for log files")?;
    ensure_dir(&base.join(APP_DIR).join("logs"))
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(dir.to_path_buf())
}
