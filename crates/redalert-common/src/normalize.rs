//! Explode raw alerts into one record per area label

use crate::{AlertRecord, RawAlert};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Label the history feed truncates mid-word
pub const MALFORMED_ASHDOD_LABEL: &str = "אשדוד - אזור תעשייה צפוני ונ";
/// Canonical spelling for [`MALFORMED_ASHDOD_LABEL`]
pub const CANONICAL_ASHDOD_LABEL: &str = "אשדוד - אזור תעשייה צפוני";

/// A whole-label literal replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCorrection {
    pub from: String,
    pub to: String,
}

impl LabelCorrection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Tunables for [`normalize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Fragments with fewer characters than this are dropped
    pub min_label_chars: usize,
    pub corrections: Vec<LabelCorrection>,
}

impl Default for NormalizeOptions {
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

impl NormalizeOptions {
    fn correct(&self, label: &str) -> String {
        self.corrections
            .iter()
            .find(|c| c.from == label)
            .map(|c| c.to.clone())
            .unwrap_or_else(|| label.to_string())
    }
}

/// Split every alert's `data` on commas and emit one [`AlertRecord`] per surviving label.
///
/// Output keeps source order, with the fragments of one alert consecutive.
/// Nothing is deduplicated.
#[instrument(skip(raw, options), fields(raw_records = raw.len()))]
pub fn normalize(raw: &[RawAlert], options: &NormalizeOptions) -> Vec<AlertRecord> {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for alert in raw {
        for fragment in alert.data.split(',') {
            let label = fragment.trim();
            if label.chars().count() < options.min_label_chars {
                dropped += 1;
                continue;
            }
            records.push(AlertRecord::from_raw(alert, options.correct(label)));
        }
    }

    debug!(
        normalized = records.len(),
        dropped, "Normalized alert records"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas(records: &[AlertRecord]) -> Vec<&str> {
        records.iter().map(|r| r.area_name.as_str()).collect()
    }

    #[test]
    fn test_splits_and_trims() {
        let raw = vec![RawAlert::new("0830", "Tel Aviv, Haifa")];
        let records = normalize(&raw, &NormalizeOptions::default());

        assert_eq!(areas(&records), vec!["Tel Aviv", "Haifa"]);
        assert!(records.iter().all(|r| r.time == "0830"));
    }

    #[test]
    fn test_drops_short_fragments() {
        let raw = vec![
            RawAlert::new("1200", "Ab, Sderot,  x ,,Eilat"),
            RawAlert::new("1300", " א "),
        ];
        let records = normalize(&raw, &NormalizeOptions::default());

        assert_eq!(areas(&records), vec!["Sderot", "Eilat"]);
        assert!(records.iter().all(|r| r.area_name.chars().count() > 2));
    }

    #[test]
    fn test_short_limit_counts_characters_not_bytes() {
        // Two Hebrew letters are four bytes but still too short
        let raw = vec![RawAlert::new("1200", "גב, גבע")];
        let records = normalize(&raw, &NormalizeOptions::default());
        assert_eq!(areas(&records), vec!["גבע"]);
    }

    #[test]
    fn test_rewrites_malformed_label() {
        let raw = vec![
            RawAlert::new("0100", format!("{}, אשקלון", MALFORMED_ASHDOD_LABEL)),
            RawAlert::new("0200", MALFORMED_ASHDOD_LABEL),
        ];
        let records = normalize(&raw, &NormalizeOptions::default());

        assert_eq!(
            areas(&records),
            vec![CANONICAL_ASHDOD_LABEL, "אשקלון", CANONICAL_ASHDOD_LABEL]
        );
        assert!(records.iter().all(|r| r.area_name != MALFORMED_ASHDOD_LABEL));
    }

    #[test]
    fn test_correction_is_whole_label_only() {
        let longer = format!("{} נוסף", MALFORMED_ASHDOD_LABEL);
        let raw = vec![RawAlert::new("0100", longer.clone())];
        let records = normalize(&raw, &NormalizeOptions::default());
        assert_eq!(areas(&records), vec![longer.as_str()]);
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let raw = vec![
            RawAlert::new("0830", "Haifa, Haifa"),
            RawAlert::new("0900", "Acre"),
        ];
        let records = normalize(&raw, &NormalizeOptions::default());
        assert_eq!(areas(&records), vec!["Haifa", "Haifa", "Acre"]);
        assert_eq!(records[2].time, "0900");
    }

    #[test]
    fn test_custom_options() {
        let options = NormalizeOptions {
            min_label_chars: 1,
            corrections: vec![LabelCorrection::new("TA", "Tel Aviv")],
        };
        let raw = vec![RawAlert::new("0830", "TA, B")];
        let records = normalize(&raw, &options);
        assert_eq!(areas(&records), vec!["Tel Aviv", "B"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[], &NormalizeOptions::default()).is_empty());
    }
}
