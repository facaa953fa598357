use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;
use crate::QueryOptions;

/// Main configuration structure for samp-query
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Client-level query defaults
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. samp-query.toml in current directory
    /// 3. /etc/samp-query/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("samp-query.toml").exists() {
            Self::from_file("samp-query.toml")?
        } else if std::path::Path::new("/etc/samp-query/config.toml").exists() {
            Self::from_file("/etc/samp-query/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(attempts) = overrides.attempts {
            self.query.attempts = attempts;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.query.timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.attempts == 0 {
            return Err(ConfigError::Validation(
                "query.attempts must be at least 1".to_string(),
            ));
        }

        if self.query.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query.timeout_ms cannot be 0".to_string(),
            ));
        }

        if self.query.resolve_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query.resolve_timeout_ms cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn query_options(&self) -> QueryOptions {
        self.query.options()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub attempts: Option<u32>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
