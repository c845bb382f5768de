//! Configuration management for ghvars
//!
//! The config file records which GitHub host to talk to by default and the
//! credentials for each known host. A missing file is not an error: every
//! value has a built-in default and can be supplied through the environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Host used when neither the config file nor the environment names one
pub const DEFAULT_HOST: &str = "github.com";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Host queried for organization-level requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_host: Option<String>,

    /// Per-host credentials, keyed by hostname
    #[serde(default)]
    pub hosts: BTreeMap<String, HostConfig>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Credentials for a single GitHub host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    /// OAuth or personal access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Login the token belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Selected-repository lookups kept in flight at once
    #[serde(default = "default_enrich_concurrency")]
    pub enrich_concurrency: usize,
}

fn default_enrich_concurrency() -> usize {
    1
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            enrich_concurrency: default_enrich_concurrency(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".config").join("ghvars").join("config.yml"))
    }

    /// Resolve the config path, preferring an explicit override
    pub fn resolve_path(custom: Option<&str>) -> Result<PathBuf> {
        match custom {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional custom path.
    ///
    /// Falls back to defaults when the file does not exist.
    pub fn load_at(custom: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(custom)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that would make every request fail later on
    fn validate(&self) -> Result<()> {
        if self.preferences.enrich_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "preferences.enrich_concurrency must be at least 1".to_string(),
            )
            .into());
        }
        if let Some(host) = &self.default_host {
            if host.trim().is_empty() {
                return Err(ConfigError::Invalid("default_host is empty".to_string()).into());
            }
        }
        Ok(())
    }

    /// Host for organization-scoped requests.
    ///
    /// Precedence: explicit override (flag or `GH_HOST`), config file, `github.com`.
    pub fn default_host(&self, host_override: Option<&str>) -> String {
        host_override
            .filter(|h| !h.is_empty())
            .or(self.default_host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_lowercase()
    }

    /// Token for `host`, with an environment-provided token taking precedence
    pub fn token_for(&self, host: &str, env_token: Option<String>) -> Option<String> {
        env_token.filter(|t| !t.is_empty()).or_else(|| {
            self.hosts
                .get(&host.to_lowercase())
                .and_then(|h| h.token.clone())
        })
    }
}
