//! # Red Alert Data
//!
//! Fetches the alert history once, normalizes it, and presents the
//! aggregates either through an interactive terminal form or as exported
//! PNG charts.

pub mod app;
pub mod cli;
pub mod events;
pub mod export;
pub mod tui;
pub mod ui;

use std::path::Path;

use redalert_common::{fetch_alerts_from_file, normalize, AlertRecord, OrefClient, RawAlert, Result};
use redalert_config::Config;
use tracing::info;

pub use app::App;
pub use cli::Args;

/// Fetch the raw history, from `input` when given, otherwise over HTTP
pub async fn fetch_raw(config: &Config, input: Option<&Path>) -> Result<Vec<RawAlert>> {
    match input {
        Some(path) => {
            info!("Reading alert history from {}", path.display());
            fetch_alerts_from_file(path).await
        }
        None => {
            let client = OrefClient::new(config.oref_config()?)?;
            client.fetch_alerts().await
        }
    }
}

/// Fetch and normalize the alert history
pub async fn load_records(config: &Config, input: Option<&Path>) -> Result<Vec<AlertRecord>> {
    let raw = fetch_raw(config, input).await?;
    let records = normalize(&raw, &config.normalize_options());
    info!(
        "Loaded {} alerts, {} area records after normalization",
        raw.len(),
        records.len()
    );
    Ok(records)
}
