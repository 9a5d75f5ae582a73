//! Configuration loading utilities

use crate::Config;
use redalert_common::Result as RedAlertResult;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "REDALERT_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for redalert_common::RedAlertError {
    fn from(err: ConfigError) -> Self {
        redalert_common::RedAlertError::config_with_source("Failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Reading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Parse YAML text; an empty document yields the defaults
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Locate the configuration file: explicit path, then the environment, then the working directory
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ["config.yaml", "config.yml"]
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    /// Load configuration from the resolved file or from defaults with environment overrides
    pub fn load(explicit: Option<&Path>) -> RedAlertResult<Config> {
        let config = match Self::resolve_path(explicit) {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::load_config(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                config.validate_all().map_err(ConfigError::ValidationError)?;
                config
            }
        };

        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("OREF_URL") {
            config.source.url = url;
        }

        if let Some(lang) = lookup("OREF_LANG") {
            config.source.lang = lang;
        }

        if let Some(from_date) = lookup("OREF_FROM_DATE") {
            config.source.from_date = from_date;
        }

        if let Some(timeout) = lookup("OREF_TIMEOUT") {
            config.source.timeout_secs = parse_var("OREF_TIMEOUT", &timeout)?;
        }

        if let Some(top) = lookup("CHART_TOP_AREAS") {
            config.chart.top_areas = parse_var("CHART_TOP_AREAS", &top)?;
        }

        if let Some(dir) = lookup("CHART_OUTPUT_DIR") {
            config.chart.output_dir = dir;
        }

        if let Some(width) = lookup("CHART_WIDTH") {
            config.chart.width = parse_var("CHART_WIDTH", &width)?;
        }

        if let Some(height) = lookup("CHART_HEIGHT") {
            config.chart.height = parse_var("CHART_HEIGHT", &height)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
