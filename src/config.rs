//! Client configuration loaded from YAML or the environment.
//!
//! A config file looks like:
//!
//! ```yaml
//! api_key: 0123456789abcdef
//! base_url: https://newsapi.org/v2/   # optional
//! timeout_secs: 10                    # optional
//! ```
//!
//! Environment variables: `NEWS_API_KEY` (required), `NEWS_API_BASE_URL`,
//! `NEWS_API_TIMEOUT_SECS`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";
/// Overall deadline for one call, connect plus read.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_KEY_ENV: &str = "NEWS_API_KEY";
pub const BASE_URL_ENV: &str = "NEWS_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "NEWS_API_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("no API key configured (set NEWS_API_KEY or `api_key`)")]
    MissingApiKey,

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings needed to build a [`NewsApiClient`](crate::NewsApiClient).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// The key stays out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Config with the given key and default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    /// Read and parse a YAML config file.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&yaml)?;
        debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Loaded client config");
        Ok(config)
    }

    /// Build a config from `NEWS_API_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV).ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
        }
        config.validate()
    }

    /// Reject a blank key or a zero timeout. Every constructor that returns
    /// `Result` runs this; call it after editing fields by hand.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "timeout_secs",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}
