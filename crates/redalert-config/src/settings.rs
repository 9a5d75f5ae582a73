//! Application configuration structures

use crate::validation::DATE_FORMAT;
use chrono::NaiveDate;
use redalert_common::{
    normalize::{CANONICAL_ASHDOD_LABEL, MALFORMED_ASHDOD_LABEL},
    oref::DEFAULT_HISTORY_URL,
    LabelCorrection, LogFormat, LoggingConfig, NormalizeOptions, OrefConfig, RedAlertError,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Alert history endpoint settings
    #[validate]
    pub source: SourceConfig,

    /// Record cleanup settings
    #[validate]
    pub normalize: NormalizeConfig,

    /// Chart rendering settings
    #[validate]
    pub chart: ChartConfig,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Alert history endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SourceConfig {
    /// Endpoint URL
    #[validate(url)]
    pub url: String,

    /// Label language
    #[validate(custom(function = "crate::validation::validate_lang"))]
    pub lang: String,

    /// Endpoint `mode` parameter
    #[validate(range(max = 3))]
    pub mode: u8,

    /// First day of the requested range, `YYYY-MM-DD`
    #[validate(custom(function = "crate::validation::validate_date"))]
    pub from_date: String,

    /// Request timeout in seconds, `0` for none
    #[validate(range(max = 600))]
    pub timeout_secs: u64,
}

/// Record normalization configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Labels shorter than this many characters are dropped
    #[validate(range(min = 1, max = 64))]
    pub min_label_chars: usize,

    /// Whole-label replacements applied after filtering
    pub corrections: Vec<LabelCorrection>,
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartConfig {
    /// How many of the most alerted areas the area chart shows
    #[validate(range(min = 1, max = 500))]
    pub top_areas: usize,

    /// Image width in pixels
    #[validate(range(min = 100, max = 4000))]
    pub width: u32,

    /// Image height in pixels
    #[validate(range(min = 100, max = 4000))]
    pub height: u32,

    /// Directory exported PNG files are written to
    #[validate(length(min = 1))]
    pub output_dir: String,

    /// Whether every opened chart is also saved as a PNG
    pub export_png: bool,

    /// Font family for titles and labels
    #[validate(length(min = 1))]
    pub font_family: String,

    #[validate(custom(function = "crate::validation::validate_hex_color"))]
    pub background_color: String,

    #[validate(custom(function = "crate::validation::validate_hex_color"))]
    pub bar_color: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "crate::validation::validate_log_level"))]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Line layout (pretty, compact, plain, json)
    #[validate(custom(function = "crate::validation::validate_log_format"))]
    pub format: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_HISTORY_URL.to_string(),
            lang: "he".to_string(),
            mode: 0,
            from_date: "2020-05-10".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            min_label_chars: 3,
            corrections: vec![LabelCorrection::new(
                MALFORMED_ASHDOD_LABEL,
                CANONICAL_ASHDOD_LABEL,
            )],
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_areas: 40,
            width: 1600,
            height: 1000,
            output_dir: "charts".to_string(),
            export_png: true,
            font_family: "sans-serif".to_string(),
            background_color: "#FFFFFF".to_string(),
            bar_color: "#1F77B4".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("redalert.log".to_string()),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.normalize.validate_corrections()?;
        Ok(())
    }

    /// Client settings for the history endpoint
    pub fn oref_config(&self) -> redalert_common::Result<OrefConfig> {
        let from_date = NaiveDate::parse_from_str(&self.source.from_date, DATE_FORMAT)
            .map_err(|e| RedAlertError::config_with_source("source.from_date is not a date", e))?;

        Ok(OrefConfig {
            url: self.source.url.clone(),
            lang: self.source.lang.clone(),
            mode: self.source.mode,
            from_date,
            timeout_secs: self.source.timeout_secs,
        })
    }

    /// Options for the record normalizer
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            min_label_chars: self.normalize.min_label_chars,
            corrections: self.normalize.corrections.clone(),
        }
    }

    /// Subscriber settings for the logging layer
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            format: self.logging.format.parse().unwrap_or(LogFormat::Pretty),
            file_path: self.logging.file.clone(),
            include_targets: true,
        }
    }
}

impl NormalizeConfig {
    /// Every correction needs a non-empty source label
    pub fn validate_corrections(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();

        if self.corrections.iter().any(|c| c.from.trim().is_empty()) {
            errors.add("corrections", validator::ValidationError::new("empty_correction_source"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
