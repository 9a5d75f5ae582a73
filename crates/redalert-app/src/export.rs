//! PNG export of dashboard charts

use redalert_common::Result;
use redalert_graphs::{AlertDashboard, ChartKind, ChartRenderer, ChartSeries, HorizontalBarChart};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Target file for a chart inside `output_dir`
pub fn export_path(output_dir: &Path, kind: &ChartKind) -> PathBuf {
    output_dir.join(format!("{}.png", kind.file_stem()))
}

/// Render `series` to `<output_dir>/<stem>.png`, creating the directory if needed
#[instrument(skip(dashboard, series), fields(title = %series.title))]
pub async fn export_chart(
    dashboard: &AlertDashboard,
    kind: &ChartKind,
    series: &ChartSeries,
    output_dir: &Path,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir).await?;

    let path = export_path(output_dir, kind);
    HorizontalBarChart::new()
        .render_to_file(&dashboard.graph_config(), series, &path)
        .await?;

    info!("Exported {}", path.display());
    Ok(path)
}

/// Headless run: top areas, hourly, and optionally one area
pub async fn export_all(
    dashboard: &AlertDashboard,
    area: Option<&str>,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut kinds = vec![ChartKind::TopAreas, ChartKind::Hourly];
    if let Some(area) = area {
        kinds.push(ChartKind::AreaHours(area.to_string()));
    }

    let series = kinds
        .iter()
        .map(|kind| dashboard.series(kind))
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(kinds.len());
    for (kind, series) in kinds.iter().zip(&series) {
        written.push(export_chart(dashboard, kind, series, output_dir).await?);
    }
    Ok(written)
}
