//! Feed endpoint configuration: defaults, a `[feed]` TOML table and
//! environment overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const ENV_NEO_API_KEY: &str = "DEBRIS_NEO_API_KEY";
pub const ENV_NEO_BASE_URL: &str = "DEBRIS_NEO_BASE_URL";
pub const ENV_NEO_TIMEOUT_MS: &str = "DEBRIS_NEO_TIMEOUT_MS";
pub const ENV_NEO_START_DATE: &str = "DEBRIS_NEO_START_DATE";
pub const ENV_NEO_END_DATE: &str = "DEBRIS_NEO_END_DATE";

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_START_DATE: &str = "2024-01-01";
pub const DEFAULT_END_DATE: &str = "2024-01-07";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub base_url: String,
    pub api_key: String,
    /// First day of the requested window (`YYYY-MM-DD`).
    pub start_date: String,
    /// Last day of the requested window (`YYYY-MM-DD`).
    pub end_date: String,
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            start_date: DEFAULT_START_DATE.to_string(),
            end_date: DEFAULT_END_DATE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedConfigError {
    #[error("read config file failed ({path}): {message}")]
    ReadConfigFile { path: String, message: String },
    #[error("parse config file failed ({path}): {message}")]
    ParseConfigFile { path: String, message: String },
    #[error("invalid timeout value: {value}")]
    InvalidTimeout { value: String },
}

#[derive(Debug, Default, Deserialize)]
struct FeedFile {
    #[serde(default)]
    feed: FeedConfig,
}

impl FeedConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, FeedConfigError> {
        let mut config = Self::default();
        config.apply_overrides_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// `[feed]` table of a TOML file, then the process environment.
    pub fn from_config_file(path: &Path) -> Result<Self, FeedConfigError> {
        let content = fs::read_to_string(path).map_err(|err| FeedConfigError::ReadConfigFile {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let file: FeedFile =
            toml::from_str(&content).map_err(|err| FeedConfigError::ParseConfigFile {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        let mut config = file.feed;
        config.apply_overrides_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay values from `getter` (normally the environment). Blank values
    /// are ignored.
    pub fn apply_overrides_with<F>(&mut self, mut getter: F) -> Result<(), FeedConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut lookup = |key: &str| getter(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = lookup(ENV_NEO_BASE_URL) {
            self.base_url = value;
        }
        if let Some(value) = lookup(ENV_NEO_API_KEY) {
            self.api_key = value;
        }
        if let Some(value) = lookup(ENV_NEO_START_DATE) {
            self.start_date = value;
        }
        if let Some(value) = lookup(ENV_NEO_END_DATE) {
            self.end_date = value;
        }
        if let Some(value) = lookup(ENV_NEO_TIMEOUT_MS) {
            self.timeout_ms = value
                .trim()
                .parse::<u64>()
                .map_err(|_| FeedConfigError::InvalidTimeout { value })?;
        }
        Ok(())
    }

    /// `{base_url}/feed`, tolerant of a trailing slash.
    pub fn feed_url(&self) -> String {
        format!("{}/feed", self.base_url.trim_end_matches('/'))
    }
}
