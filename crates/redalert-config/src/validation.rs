//! Validation utilities and regex patterns

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Date format used for `source.from_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Languages the history endpoint serves labels in
pub const SUPPORTED_LANGS: [&str; 4] = ["he", "en", "ar", "ru"];

/// Validate a `#RRGGBB` color
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

/// Validate a `YYYY-MM-DD` calendar date
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_date"))
}

/// Validate the endpoint language code
pub fn validate_lang(lang: &str) -> Result<(), ValidationError> {
    if SUPPORTED_LANGS.contains(&lang) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_lang"))
    }
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate a log line format name
pub fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format {
        "pretty" | "compact" | "plain" | "json" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_format")),
    }
}
