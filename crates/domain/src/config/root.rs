use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const DEFAULT_CONFIG_FILE: &str = "dnscache.toml";

/// Main configuration structure for dnscache
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Cache and refresh behaviour
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnscache.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(interval) = overrides.refresh_interval_secs {
            self.cache.refresh_interval_secs = interval;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cache = &self.cache;

        if cache.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "lookup_timeout_ms cannot be 0".to_string(),
            ));
        }

        if cache.refresh_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "refresh_timeout_ms cannot be 0".to_string(),
            ));
        }

        if cache.refresh_concurrency == 0 {
            return Err(ConfigError::Validation(
                "refresh_concurrency cannot be 0".to_string(),
            ));
        }

        if cache.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh_interval_secs cannot be 0".to_string(),
            ));
        }

        if cache.shard_amount < 2 || !cache.shard_amount.is_power_of_two() {
            return Err(ConfigError::Validation(format!(
                "shard_amount must be a power of two greater than 1, got {}",
                cache.shard_amount
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub refresh_interval_secs: Option<u64>,
}
