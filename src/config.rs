//! Configuration handling for the TUI

use crate::relay::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the relay endpoint
pub const ENDPOINT_ENV: &str = "ABRACS_RELAY_ENDPOINT";

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "abracs_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Form relay address
    pub relay_endpoint: Option<String>,
    /// `tracing` filter directive
    pub log_filter: Option<String>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("br", "abracs", "abracs-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file lives; `None` when no home directory is known
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("abracs-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Self::parse(&content);
            }
        }

        Ok(Self::default())
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Whether a config file has been written yet
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Config written on first run so the user has a file to edit
    pub fn template() -> Self {
        Self {
            relay_endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            log_filter: Some(DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Relay endpoint: environment, then config file, then the built-in address
    pub fn endpoint(&self) -> String {
        self.endpoint_with(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.relay_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
