//! Home Front Command alert history client
//!
//! One GET against the public `GetAlarmsHistory` endpoint returns every alert
//! between two dates as a JSON array. There is no paging, no authentication and
//! no retry: a failed request is reported to the caller as-is.

use crate::error::{RedAlertError, Result};
use crate::types::RawAlert;
use chrono::{Datelike, Local, NaiveDate};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Public alert history endpoint
pub const DEFAULT_HISTORY_URL: &str = "https://www.oref.org.il//Shared/Ajax/GetAlarmsHistory.aspx";

/// Configuration for the alert history client
#[derive(Debug, Clone)]
pub struct OrefConfig {
    /// Full endpoint URL
    pub url: String,
    /// Language of area labels (`he`, `en`, `ar`, `ru`)
    pub lang: String,
    /// Endpoint `mode` parameter; `0` selects an explicit date range
    pub mode: u8,
    /// First day of the requested range
    pub from_date: NaiveDate,
    /// Request timeout in seconds; `0` waits indefinitely
    pub timeout_secs: u64,
}

impl Default for OrefConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_HISTORY_URL.to_string(),
            lang: "he".to_string(),
            mode: 0,
            from_date: default_from_date(),
            timeout_secs: 30,
        }
    }
}

/// Start of Operation Guardian of the Walls
pub fn default_from_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 5, 10).unwrap_or_default()
}

impl OrefConfig {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the first day of the range
    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = from_date;
        self
    }

    /// Set the endpoint URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Render a date the way the endpoint expects it: `D.M.YYYY`, no zero padding
pub fn format_query_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Parse a response body into raw alerts.
///
/// The endpoint answers with an empty body when the range holds no alerts and
/// sometimes prefixes the JSON with a byte order mark.
pub fn parse_alerts(body: &str) -> Result<Vec<RawAlert>> {
    let body = body.trim_start_matches('\u{feff}').trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(body)?)
}

/// Load a previously saved response body from disk
#[instrument]
pub async fn fetch_alerts_from_file(path: &Path) -> Result<Vec<RawAlert>> {
    info!("Loading alert history from {}", path.display());
    let body = tokio::fs::read_to_string(path).await?;
    let alerts = parse_alerts(&body)?;
    info!("Loaded {} alerts from file", alerts.len());
    Ok(alerts)
}

/// Alert history HTTP client
#[derive(Debug, Clone)]
pub struct OrefClient {
    client: Client,
    config: OrefConfig,
}

impl OrefClient {
    /// Create a new client with the given configuration
    pub fn new(config: OrefConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| RedAlertError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Query parameters for a request ending on `to_date`
    pub fn build_query(&self, to_date: NaiveDate) -> Vec<(&'static str, String)> {
        vec![
            ("lang", self.config.lang.clone()),
            ("fromDate", format_query_date(self.config.from_date)),
            ("toDate", format_query_date(to_date)),
            ("mode", self.config.mode.to_string()),
        ]
    }

    /// Fetch every alert from the configured start date up to today
    pub async fn fetch_alerts(&self) -> Result<Vec<RawAlert>> {
        self.fetch_alerts_until(Local::now().date_naive()).await
    }

    /// Fetch every alert from the configured start date up to `to_date`
    #[instrument(skip(self), fields(url = %self.config.url, from = %self.config.from_date))]
    pub async fn fetch_alerts_until(&self, to_date: NaiveDate) -> Result<Vec<RawAlert>> {
        let query = self.build_query(to_date);
        info!("Fetching alert history up to {}", to_date);

        let response = self.client.get(&self.config.url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RedAlertError::oref_with_status(
                format!("endpoint returned {}", status),
                status.as_u16(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RedAlertError::network_with_source("Failed to read response body", e))?;
        debug!("Response body is {} bytes", body.len());

        let alerts = parse_alerts(&body)?;
        info!("Fetched {} alerts", alerts.len());
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OrefConfig::default();
        assert_eq!(config.url, DEFAULT_HISTORY_URL);
        assert_eq!(config.lang, "he");
        assert_eq!(config.mode, 0);
        assert_eq!(config.from_date, NaiveDate::from_ymd_opt(2020, 5, 10).unwrap());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let from = NaiveDate::from_ymd_opt(2023, 10, 7).unwrap();
        let config = OrefConfig::default()
            .with_timeout(0)
            .with_from_date(from)
            .with_url("http://localhost:9999/history");
        assert_eq!(config.timeout_secs, 0);
        assert_eq!(config.from_date, from);
        assert_eq!(config.url, "http://localhost:9999/history");
    }

    #[test]
    fn test_format_query_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 10).unwrap();
        assert_eq!(format_query_date(date), "10.5.2020");

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_query_date(date), "2.1.2024");
    }

    #[test]
    fn test_build_query() {
        let client = OrefClient::new(OrefConfig::default()).unwrap();
        let to = NaiveDate::from_ymd_opt(2021, 5, 21).unwrap();
        let query = client.build_query(to);

        assert_eq!(
            query,
            vec![
                ("lang", "he".to_string()),
                ("fromDate", "10.5.2020".to_string()),
                ("toDate", "21.5.2021".to_string()),
                ("mode", "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_without_timeout() {
        let client = OrefClient::new(OrefConfig::default().with_timeout(0));
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_alerts() {
        let body = r#"[{"time":"0830","data":"Tel Aviv, Haifa"},{"time":"2110","data":"Tel Aviv"}]"#;
        let alerts = parse_alerts(body).unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].data, "Tel Aviv, Haifa");
        assert_eq!(alerts[1].time, "2110");
    }

    #[test]
    fn test_parse_alerts_tolerates_bom_and_empty_body() {
        let body = "\u{feff}[{\"time\":\"0830\",\"data\":\"Haifa\"}]";
        assert_eq!(parse_alerts(body).unwrap().len(), 1);
        assert!(parse_alerts("").unwrap().is_empty());
        assert!(parse_alerts("  \r\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_alerts_rejects_non_json() {
        let err = parse_alerts("<html>Access Denied</html>").unwrap_err();
        assert!(matches!(err, RedAlertError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_fetch_alerts_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"[{"time":"21:10","data":"Sderot"}]"#).unwrap();

        let alerts = fetch_alerts_from_file(&path).await.unwrap();
        assert_eq!(alerts, vec![RawAlert::new("21:10", "Sderot")]);
    }

    #[test]
    fn test_fetch_alerts_from_missing_file() {
        let err = tokio_test::block_on(fetch_alerts_from_file(Path::new("/nonexistent/history.json")))
            .unwrap_err();
        assert!(matches!(err, RedAlertError::Io(_)));
    }
}
