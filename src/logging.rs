//! Log file setup.
//!
//! The terminal belongs to the TUI, so tracing output goes to a file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Parse a configured log level, falling back to `info`.
pub fn parse_level(level: &str) -> Level {
    level.parse().unwrap_or(Level::INFO)
}

/// Install the global subscriber writing to `path`.
///
/// # Arguments
/// * `path` - Log file, appended to; parent directories are created
/// * `level` - Maximum level recorded
///
/// # Returns
/// * `Result<()>` - Error if the file cannot be opened or a subscriber is
///   already installed
pub fn init(path: &Path, level: Level) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
