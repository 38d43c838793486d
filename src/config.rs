//! Configuration management for the attendee list application.
//!
//! Handles loading configuration from JSONC files.
//! Manages the listing endpoint, event selection, and logging preferences.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
///
/// Contains the listing endpoint location and user preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the event API (without trailing slash)
    pub api_base_url: String,
    /// Event whose attendees are listed
    pub event_id: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3333".to_string(),
            event_id: String::new(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            log_path: "attendee-list.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/attendee-list/config.jsonc`
    /// 3. `~/.config/attendee-list/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to config file or error
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::app_config_dir()?.join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to log file or error
    ///
    /// # Details
    /// If log_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to the application config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_path);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            Ok(Self::app_config_dir()?.join(log_path))
        }
    }

    /// URL of the attendee listing resource for the configured event.
    pub fn attendees_url(&self) -> String {
        format!(
            "{}/events/{}/attendees",
            self.api_base_url.trim_end_matches('/'),
            self.event_id
        )
    }

    fn app_config_dir() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("attendee-list"))
    }
}

/// Strip `//` line comments that are not inside a string literal.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let bytes = line.as_bytes();
            for i in 0..bytes.len() {
                match bytes[i] {
                    _ if escaped => escaped = false,
                    b'\\' if in_string => escaped = true,
                    b'"' => in_string = !in_string,
                    b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => {
                        return line[..i].trim_end();
                    }
                    _ => {}
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
