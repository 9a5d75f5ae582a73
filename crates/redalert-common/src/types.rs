//! Alert record types shared across the workspace

use crate::{RedAlertError, Result};
use serde::{Deserialize, Serialize};

/// One alert event exactly as the history endpoint returns it.
///
/// `data` may name several areas joined by commas. Only `data` and `time`
/// are required; the remaining fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAlert {
    /// Comma-joined area labels
    pub data: String,
    /// Local time of the alert; the first two characters are the hour
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, rename = "alertDate", skip_serializing_if = "Option::is_none")]
    pub alert_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RawAlert {
    /// Minimal record with only the required fields set
    pub fn new(time: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            time: time.into(),
            date: None,
            datetime: None,
            alert_date: None,
            category: None,
            category_desc: None,
            title: None,
        }
    }
}

/// One alert exploded down to a single, trimmed area label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub area_name: String,
    pub time: String,
    pub date: Option<String>,
    pub datetime: Option<String>,
    pub alert_date: Option<String>,
    pub category: Option<i64>,
    pub category_desc: Option<String>,
    pub title: Option<String>,
}

impl AlertRecord {
    /// Copy every field of `raw` except `data`, which is replaced by `area_name`
    pub fn from_raw(raw: &RawAlert, area_name: String) -> Self {
        Self {
            area_name,
            time: raw.time.clone(),
            date: raw.date.clone(),
            datetime: raw.datetime.clone(),
            alert_date: raw.alert_date.clone(),
            category: raw.category,
            category_desc: raw.category_desc.clone(),
            title: raw.title.clone(),
        }
    }

    /// Hour of day taken from the first two characters of `time`
    pub fn hour(&self) -> Result<u8> {
        parse_hour(&self.time)
    }
}

/// Parse the leading two-digit hour of an alert time such as `"08:30"` or `"0830"`
pub fn parse_hour(time: &str) -> Result<u8> {
    let prefix = time
        .get(..2)
        .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| {
            RedAlertError::validation_field(format!("cannot read hour from time '{}'", time), "time")
        })?;

    let hour: u8 = prefix.parse().map_err(|_| {
        RedAlertError::validation_field(format!("cannot read hour from time '{}'", time), "time")
    })?;

    if hour > 23 {
        return Err(RedAlertError::validation_field(
            format!("hour {} out of range in time '{}'", hour, time),
            "time",
        ));
    }
    Ok(hour)
}
