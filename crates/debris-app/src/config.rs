//! Host configuration: a TOML file with `[simulation]` and `[feed]` tables,
//! plus the feed's environment overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use debris_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use debris_feed::{FeedConfig, FeedConfigError};
use debris_sim::SimConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    pub seed: u64,
    pub time_scale: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        let defaults = SimConfig::default();
        Self {
            seed: defaults.seed,
            time_scale: defaults.time_scale,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationSection,
    pub feed: FeedConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    #[error("read config file failed ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config file failed ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Feed(#[from] FeedConfigError),
}

impl AppConfig {
    /// Defaults, or the given file; environment overrides on top.
    pub fn load(path: Option<&Path>) -> Result<Self, AppConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config
            .feed
            .apply_overrides_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppConfigError> {
        let content = fs::read_to_string(path).map_err(|source| AppConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| AppConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.simulation.seed,
            time_scale: self.simulation.time_scale,
            width: self.simulation.width,
            height: self.simulation.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine() {
        let config = AppConfig::default();
        let sim = config.sim_config();
        assert_eq!(sim.seed, 42);
        assert_eq!(sim.time_scale, 1.0);
        assert_eq!(sim.width, 1280.0);
        assert_eq!(sim.height, 720.0);
        assert_eq!(config.feed, FeedConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = AppConfig::from_toml(
            r#"
            [simulation]
            seed = 7
            width = 800.0

            [feed]
            end_date = "2024-01-02"
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.width, 800.0);
        assert_eq!(config.simulation.height, 720.0);
        assert_eq!(config.feed.end_date, "2024-01-02");
        assert_eq!(config.feed.api_key, "DEMO_KEY");
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(AppConfig::from_toml("[simulation]\nseed = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("debris-app-missing-config.toml");
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, AppConfigError::Read { .. }));
        assert!(err.to_string().starts_with("read config file failed"));
    }
}
