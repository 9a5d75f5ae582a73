//! Counting passes over normalized alert records

use crate::{AreaCount, HourCount};
use redalert_common::{AlertRecord, RedAlertError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, instrument};

/// Default number of areas kept by [`AreaAggregator`]
pub const DEFAULT_TOP_AREAS: usize = 40;

/// Trait for aggregating records into one kind of data point
pub trait DataAggregator<T> {
    /// Process normalized records and return aggregated data points in display order
    fn aggregate(&self, records: &[AlertRecord]) -> Result<Vec<T>>;
}

/// Most alerted areas, descending by count.
///
/// Equal counts keep the order in which their area first appears in the
/// record sequence.
#[derive(Debug, Clone)]
pub struct AreaAggregator {
    pub limit: usize,
}

impl AreaAggregator {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_TOP_AREAS,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for AreaAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataAggregator<AreaCount> for AreaAggregator {
    #[instrument(skip(self, records), fields(records = records.len(), limit = self.limit))]
    fn aggregate(&self, records: &[AlertRecord]) -> Result<Vec<AreaCount>> {
        // area -> (first seen index, count)
        let mut counts: HashMap<&str, (usize, u32)> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            counts.entry(record.area_name.as_str()).or_insert((index, 0)).1 += 1;
        }
        let distinct = counts.len();

        let mut ranked: Vec<(&str, usize, u32)> = counts
            .into_iter()
            .map(|(area, (first_seen, count))| (area, first_seen, count))
            .collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
        ranked.truncate(self.limit);

        debug!("Ranked {} of {} distinct areas", ranked.len(), distinct);
        Ok(ranked
            .into_iter()
            .map(|(area, _, count)| AreaCount {
                area: area.to_string(),
                count,
            })
            .collect())
    }
}

/// Alerts per hour of day, descending by hour
#[derive(Debug, Clone, Default)]
pub struct HourAggregator;

impl HourAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl DataAggregator<HourCount> for HourAggregator {
    #[instrument(skip(self, records), fields(records = records.len()))]
    fn aggregate(&self, records: &[AlertRecord]) -> Result<Vec<HourCount>> {
        let mut counts: BTreeMap<u8, u32> = BTreeMap::new();
        for record in records {
            *counts.entry(record.hour()?).or_insert(0) += 1;
        }

        debug!("Aggregated {} distinct hours", counts.len());
        Ok(hours_descending(&counts))
    }
}

fn hours_descending(counts: &BTreeMap<u8, u32>) -> Vec<HourCount> {
    counts
        .iter()
        .rev()
        .map(|(&hour, &count)| HourCount { hour, count })
        .collect()
}

/// Per-area hourly counts plus the sorted list of areas, built once per session
#[derive(Debug, Clone, Default)]
pub struct AreaHourIndex {
    by_area: HashMap<String, BTreeMap<u8, u32>>,
    areas: Vec<String>,
}

impl AreaHourIndex {
    /// Build the index from normalized records
    #[instrument(skip(records), fields(records = records.len()))]
    pub fn build(records: &[AlertRecord]) -> Result<Self> {
        let mut by_area: HashMap<String, BTreeMap<u8, u32>> = HashMap::new();
        let mut areas = BTreeSet::new();

        for record in records {
            let hour = record.hour()?;
            if !by_area.contains_key(&record.area_name) {
                areas.insert(record.area_name.clone());
            }
            *by_area
                .entry(record.area_name.clone())
                .or_default()
                .entry(hour)
                .or_insert(0) += 1;
        }

        debug!("Indexed {} areas", areas.len());
        Ok(Self {
            by_area,
            areas: areas.into_iter().collect(),
        })
    }

    /// Distinct area labels in ascending order
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn contains(&self, area: &str) -> bool {
        self.by_area.contains_key(area)
    }

    /// Hourly counts for one area, descending by hour
    pub fn hours_for(&self, area: &str) -> Result<Vec<HourCount>> {
        self.by_area
            .get(area)
            .map(hours_descending)
            .ok_or_else(|| {
                RedAlertError::validation_field(format!("unknown area '{}'", area), "area")
            })
    }
}
