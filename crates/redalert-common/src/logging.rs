//! Structured logging infrastructure

use std::path::Path;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output layout of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// One compact line per event
    Compact,
    /// The default fmt layer layout
    Plain,
    /// Newline-delimited JSON objects
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = crate::RedAlertError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(crate::RedAlertError::validation_field(
                format!("unknown log format '{}'", other),
                "logging.format",
            )),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "redalert_graphs=trace")
    pub level: String,
    /// Line layout
    pub format: LogFormat,
    /// Optional file path for log output; stdout when `None`
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_targets: true,
        }
    }
}

/// Append-only writer for `path`; the parent directory is created if missing
fn open_log_file(path: &str) -> Result<RollingFileAppender, InitError> {
    let path = Path::new(path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("redalert.log");

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
}

/// Build the filter for a level string, falling back to `info` when it does not parse
pub fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(build_env_filter(&config.level));

    match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer().pretty().with_target(config.include_targets);
            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry.with(layer.with_ansi(false).with_writer(file)).try_init()?;
            } else {
                registry.with(layer).try_init()?;
            }
        }
        LogFormat::Compact => {
            let layer = fmt::layer().compact().with_target(config.include_targets);
            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry.with(layer.with_ansi(false).with_writer(file)).try_init()?;
            } else {
                registry.with(layer).try_init()?;
            }
        }
        LogFormat::Plain => {
            let layer = fmt::layer().with_target(config.include_targets);
            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry.with(layer.with_ansi(false).with_writer(file)).try_init()?;
            } else {
                registry.with(layer).try_init()?;
            }
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_target(config.include_targets);
            if let Some(file_path) = config.file_path {
                let file = open_log_file(&file_path)?;
                registry.with(layer.with_writer(file)).try_init()?;
            } else {
                registry.with(layer).try_init()?;
            }
        }
    }

    Ok(())
}
