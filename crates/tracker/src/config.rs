use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::source::{FileJobSource, JobSource, SampleJobSource};

/// Expand tilde (~) in a path to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(rest) = path_str.strip_prefix("~/") {
            if let Some(home) = std::env::var_os("HOME") {
                return PathBuf::from(home).join(rest);
            }
        } else if path_str == "~" {
            if let Some(home) = std::env::var_os("HOME") {
                return PathBuf::from(home);
            }
        }
    }
    path.to_path_buf()
}

/// Configuration shared by the CLI and the TUI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// JSON file holding job records; sample data is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Where the TUI writes its log; the TUI stays silent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Input poll interval for the TUI event loop
    pub tick_rate_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file: None,
            tick_rate_ms: 250,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a file, or return defaults if path is None or file doesn't exist
    pub fn load_config(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(config_path) if config_path.exists() => {
                let content = std::fs::read_to_string(config_path).with_context(|| {
                    format!("Failed to read config file: {}", config_path.display())
                })?;

                if config_path.extension().and_then(|s| s.to_str()) == Some("toml") {
                    toml::from_str::<TrackerConfig>(&content).with_context(|| {
                        format!("Failed to parse TOML config: {}", config_path.display())
                    })?
                } else {
                    serde_json::from_str::<TrackerConfig>(&content).with_context(|| {
                        format!("Failed to parse JSON config: {}", config_path.display())
                    })?
                }
            }
            Some(config_path) => {
                tracing::warn!("Config file not found at {:?}, using defaults", config_path);
                Self::default()
            }
            None => Self::default(),
        };

        config.expand_tilde_in_paths();
        config.validate()?;

        Ok(config)
    }

    /// Pick the config file: explicit path, then the system TOML, then the system JSON
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        ["/etc/jobtrack/config.toml", "/etc/jobtrack/config.json"]
            .into_iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            anyhow::bail!("tick_rate_ms must be at least 1");
        }
        Ok(())
    }

    /// Build the data source this configuration points at
    pub fn job_source(&self) -> Box<dyn JobSource> {
        match &self.data_file {
            Some(path) => Box::new(FileJobSource::new(path)),
            None => Box::new(SampleJobSource::new()),
        }
    }

    fn expand_tilde_in_paths(&mut self) {
        if let Some(ref path) = self.data_file {
            self.data_file = Some(expand_tilde(path));
        }
        if let Some(ref path) = self.log_file {
            self.log_file = Some(expand_tilde(path));
        }
    }
}
