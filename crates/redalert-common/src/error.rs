//! Error types shared by every Red Alert Data crate

use thiserror::Error;

/// Result type alias for Red Alert Data operations
pub type Result<T> = std::result::Result<T, RedAlertError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong between the history request and a saved chart
#[derive(Error, Debug)]
pub enum RedAlertError {
    /// Unreadable or invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failures talking to the alert history endpoint
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The history endpoint answered with a non-success status
    #[error("Alert history API error: {message}")]
    Oref {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The response body was not the expected JSON array
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chart layout or PNG output failed
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Malformed record data or an invalid selection
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

fn boxed(source: impl std::error::Error + Send + Sync + 'static) -> Option<BoxedSource> {
    Some(Box::new(source))
}

impl RedAlertError {
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: boxed(source),
        }
    }

    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: boxed(source),
        }
    }

    /// A rejected history request, keeping the HTTP status for the caller
    pub fn oref_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Oref {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: boxed(source),
        }
    }

    /// Validation failure tied to the record or config field that caused it
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

impl From<reqwest::Error> for RedAlertError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Alert history request timed out".to_string()
        } else if err.is_connect() {
            "Could not reach the alert history server".to_string()
        } else if let Some(status) = err.status() {
            format!("Alert history request failed with status {}", status.as_u16())
        } else {
            "Alert history request failed".to_string()
        };
        Self::network_with_source(message, err)
    }
}

#[cfg(feature = "plotters")]
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for RedAlertError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Chart drawing failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_display_messages() {
        let io = io::Error::new(io::ErrorKind::NotFound, "config.yaml");
        assert_eq!(
            RedAlertError::config_with_source("bad top_areas", io).to_string(),
            "Configuration error: bad top_areas"
        );

        let err = RedAlertError::validation_field("hour out of range", "time");
        assert_eq!(err.to_string(), "Validation error: hour out of range");
        assert!(matches!(err, RedAlertError::Validation { field: Some(ref f), .. } if f == "time"));
    }

    #[test]
    fn test_oref_status_is_kept() {
        let err = RedAlertError::oref_with_status("Forbidden", 403);
        assert_eq!(err.to_string(), "Alert history API error: Forbidden");
        assert!(matches!(err, RedAlertError::Oref { status_code: Some(403), .. }));
    }

    #[test]
    fn test_conversions() {
        let err: RedAlertError = io::Error::new(io::ErrorKind::NotFound, "history.json").into();
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());

        let parse = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let err: RedAlertError = parse.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_source_chain() {
        let root = io::Error::new(io::ErrorKind::PermissionDenied, "charts/");
        let err = RedAlertError::graph_with_source(
            "Could not save chart",
            RedAlertError::config_with_source("output_dir unusable", root),
        );

        let mut current: &dyn Error = &err;
        let mut depth = 0;
        while let Some(source) = current.source() {
            current = source;
            depth += 1;
        }
        assert_eq!(depth, 2);
        assert_eq!(current.to_string(), "charts/");
    }
}
