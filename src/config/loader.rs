use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Why the counter config could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

impl Config {
    /// `<config dir>/fact-counter/config.toml`, or `./fact-counter/config.toml`
    /// when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("fact-counter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Parse and validate `path`. A missing file means all defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The fact service URL uses http or https
    /// - Timeouts and the timer interval are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.facts.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                message: format!("Fact service URL '{}' must start with http:// or https://", url),
            });
        }

        if self.facts.timeout_seconds == 0 || self.facts.connect_timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                message: "Fact service timeouts must be greater than zero".to_string(),
            });
        }

        if self.timer.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                message: "Timer interval must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
