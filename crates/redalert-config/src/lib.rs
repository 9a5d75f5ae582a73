//! Configuration management for Red Alert Data

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_ENV};
pub use settings::{ChartConfig, Config, LoggingSettings, NormalizeConfig, SourceConfig};
