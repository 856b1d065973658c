// Runtime configuration.
// Loaded from an optional JSON file in the platform config directory, then environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Public GitHub REST API host.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const ENV_BASE_URL: &str = "GHFETCH_BASE_URL";
const ENV_USER_AGENT: &str = "GHFETCH_USER_AGENT";
const ENV_TIMEOUT_SECS: &str = "GHFETCH_TIMEOUT_SECS";
const ENV_LOG: &str = "GHFETCH_LOG";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    /// Per-request timeout in seconds. Zero means no timeout.
    pub timeout_secs: u64,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("ghfetch/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load from the default config file (if present) and the environment.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)?;
        config.normalize()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            self.user_agent = agent;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a whole number, got {:?}", ENV_TIMEOUT_SECS, secs))
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        self.normalize()
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    fn normalize(&mut self) -> Result<()> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        self.base_url = trimmed.to_string();

        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("user_agent cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Path to the config file (~/.config/ghfetch/config.json on Linux).
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ghfetch").map(|dirs| dirs.config_dir().join("config.json"))
}
