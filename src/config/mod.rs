//! Configuration management for Agora

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "AGORA_API_URL";

/// The signed-in user, sent along with registrations and agent creations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Account email
    pub email: String,
    /// Display name
    pub username: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the agent backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL prepended to printed session routes (routes are printed bare when unset)
    #[serde(default)]
    pub web_url: Option<String>,

    /// Global timeout for a single backend request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Signed-in user; registration and agent creation need it
    #[serde(default)]
    pub user: Option<Identity>,
}

fn default_api_url() -> String {
    "https://cortex-rnd0.onrender.com".to_string()
}

const fn default_request_timeout() -> u64 {
    10
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            web_url: None,
            request_timeout_secs: default_request_timeout(),
            poll_interval_ms: default_poll_interval(),
            user: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed
    pub fn load() -> Result<Self> {
        let path = paths::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment overrides through the given lookup
    pub fn apply_env(&mut self, mut var: impl FnMut(&'static str) -> Option<String>) {
        if let Some(url) = var(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.api_url = url;
        }
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
