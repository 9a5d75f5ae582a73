//! Alert dashboard view model
//!
//! Holds the normalized dataset for the session and turns it into chart
//! series on demand. Rendering is left to a [`ChartRenderer`](crate::ChartRenderer).

use crate::{
    AreaAggregator, AreaHourIndex, Bar, ChartSeries, DataAggregator, GraphConfig, HourAggregator,
    HourCount,
};
use redalert_common::{AlertRecord, Result};
use redalert_config::ChartConfig;
use tracing::{info, instrument};

/// Series name shared by every chart
pub const SERIES_NAME: &str = "Alerts";
/// Count axis label
pub const COUNT_AXIS_LABEL: &str = "Number of alerts";
pub const AREA_AXIS_LABEL: &str = "Area";
pub const HOUR_AXIS_LABEL: &str = "Hour";

/// Which chart a trigger produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    /// Hourly counts for one area
    AreaHours(String),
    /// Most alerted areas
    TopAreas,
    /// Hourly counts over all areas
    Hourly,
}

impl ChartKind {
    /// File name stem used when the chart is exported
    pub fn file_stem(&self) -> String {
        match self {
            ChartKind::AreaHours(area) => format!("area_hours_{}", sanitize_file_component(area)),
            ChartKind::TopAreas => "top_areas".to_string(),
            ChartKind::Hourly => "hourly".to_string(),
        }
    }
}

fn sanitize_file_component(value: &str) -> String {
    let cleaned: String = value
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "area".to_string()
    } else {
        cleaned
    }
}

/// Session view model built once from the normalized records
#[derive(Debug, Clone)]
pub struct AlertDashboard {
    records: Vec<AlertRecord>,
    index: AreaHourIndex,
    chart: ChartConfig,
}

impl AlertDashboard {
    /// Build the dashboard and its area-hour index
    #[instrument(skip(records, chart), fields(records = records.len()))]
    pub fn new(records: Vec<AlertRecord>, chart: ChartConfig) -> Result<Self> {
        let index = AreaHourIndex::build(&records)?;
        info!(
            "Dashboard ready with {} records over {} areas",
            records.len(),
            index.areas().len()
        );
        Ok(Self {
            records,
            index,
            chart,
        })
    }

    pub fn records(&self) -> &[AlertRecord] {
        &self.records
    }

    /// Sorted distinct area labels for the selector
    pub fn areas(&self) -> &[String] {
        self.index.areas()
    }

    /// Initial selector value
    pub fn default_area(&self) -> Option<&str> {
        self.index.areas().first().map(String::as_str)
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.chart
    }

    /// Rendering settings derived from the chart configuration
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::from(&self.chart)
    }

    /// Series for one trigger
    pub fn series(&self, kind: &ChartKind) -> Result<ChartSeries> {
        match kind {
            ChartKind::AreaHours(area) => self.area_hours(area),
            ChartKind::TopAreas => self.top_areas(),
            ChartKind::Hourly => self.hourly(),
        }
    }

    /// Most alerted areas, largest first
    pub fn top_areas(&self) -> Result<ChartSeries> {
        let limit = self.chart.top_areas;
        let counts = AreaAggregator::with_limit(limit).aggregate(&self.records)?;

        Ok(ChartSeries {
            title: format!("Number of alerts by areas, the {} most alerted areas", limit),
            x_label: COUNT_AXIS_LABEL.to_string(),
            y_label: AREA_AXIS_LABEL.to_string(),
            series_name: SERIES_NAME.to_string(),
            bars: counts.into_iter().map(|c| Bar::new(c.area, c.count)).collect(),
        })
    }

    /// Alerts per hour over the whole dataset, latest hour first
    pub fn hourly(&self) -> Result<ChartSeries> {
        let counts = HourAggregator::new().aggregate(&self.records)?;
        Ok(hour_series("Number of alerts by hours".to_string(), counts))
    }

    /// Alerts per hour in one area, latest hour first
    pub fn area_hours(&self, area: &str) -> Result<ChartSeries> {
        let counts = self.index.hours_for(area)?;
        Ok(hour_series(format!("Number of alerts by hours in {}", area), counts))
    }
}

fn hour_series(title: String, counts: Vec<HourCount>) -> ChartSeries {
    ChartSeries {
        title,
        x_label: COUNT_AXIS_LABEL.to_string(),
        y_label: HOUR_AXIS_LABEL.to_string(),
        series_name: SERIES_NAME.to_string(),
        bars: counts
            .into_iter()
            .map(|c| Bar::new(format!("{:02}", c.hour), c.count))
            .collect(),
    }
}
