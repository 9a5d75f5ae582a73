//! Alert aggregation and chart rendering for Red Alert Data

pub mod aggregator;
pub mod bar_chart;
pub mod bidi;
pub mod dashboard;
pub mod fonts;
pub mod renderer;
pub mod types;

pub use aggregator::{AreaAggregator, AreaHourIndex, DataAggregator, HourAggregator, DEFAULT_TOP_AREAS};
pub use bar_chart::HorizontalBarChart;
pub use bidi::visual_order;
pub use dashboard::{AlertDashboard, ChartKind};
pub use renderer::ChartRenderer;
pub use types::*;
