//! Property tests for record normalization.

use proptest::prelude::*;
use redalert_common::normalize::{CANONICAL_ASHDOD_LABEL, MALFORMED_ASHDOD_LABEL};
use redalert_common::{normalize, NormalizeOptions, RawAlert};

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(MALFORMED_ASHDOD_LABEL.to_string()),
        Just("שדרות".to_string()),
        Just("Tel Aviv".to_string()),
        Just("ab".to_string()),
        "[ a-zא-ת]{0,8}",
    ]
}

fn raw_alert() -> impl Strategy<Value = RawAlert> {
    (0u8..24, 0u8..60, prop::collection::vec(fragment(), 1..5)).prop_map(|(h, m, parts)| {
        let data = parts
            .iter()
            .map(|p| format!("  {} ", p))
            .collect::<Vec<_>>()
            .join(",");
        RawAlert::new(format!("{:02}:{:02}", h, m), data)
    })
}

proptest! {
    #[test]
    fn labels_are_trimmed_and_long_enough(raw in prop::collection::vec(raw_alert(), 0..20)) {
        let records = normalize(&raw, &NormalizeOptions::default());
        for record in &records {
            prop_assert_eq!(record.area_name.trim(), record.area_name.as_str());
            prop_assert!(record.area_name.chars().count() > 2);
        }
    }

    #[test]
    fn malformed_label_is_always_rewritten(raw in prop::collection::vec(raw_alert(), 0..20)) {
        let records = normalize(&raw, &NormalizeOptions::default());
        prop_assert!(records.iter().all(|r| r.area_name != MALFORMED_ASHDOD_LABEL));

        let expected = raw
            .iter()
            .flat_map(|r| r.data.split(','))
            .filter(|f| f.trim() == MALFORMED_ASHDOD_LABEL)
            .count();
        let rewritten = records
            .iter()
            .filter(|r| r.area_name == CANONICAL_ASHDOD_LABEL)
            .count();
        prop_assert!(rewritten >= expected);
    }

    #[test]
    fn fragments_keep_their_record_time(raw in prop::collection::vec(raw_alert(), 1..20)) {
        let records = normalize(&raw, &NormalizeOptions::default());
        let fragments: usize = raw.iter().map(|r| r.data.split(',').count()).sum();
        prop_assert!(records.len() <= fragments);

        for record in &records {
            prop_assert!(raw.iter().any(|r| r.time == record.time));
            prop_assert!(record.hour().is_ok());
        }
    }
}
