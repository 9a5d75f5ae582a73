//! Horizontal bar chart implementation

use crate::{fonts, visual_order, ChartRenderer, ChartSeries, GraphConfig};
use async_trait::async_trait;
use plotters::coord::Shift;
use plotters::prelude::*;
use redalert_common::{RedAlertError, Result};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Horizontal bar chart with one bar per label, first bar at the top
#[derive(Debug, Clone)]
pub struct HorizontalBarChart {
    /// Draw the count at the end of each bar
    pub show_values: bool,
    /// Longer labels are cut and end with an ellipsis
    pub max_label_chars: usize,
    /// Vertical gap around each bar in pixels
    pub bar_margin: u32,
}

impl HorizontalBarChart {
    pub fn new() -> Self {
        Self {
            show_values: true,
            max_label_chars: 40,
            bar_margin: 2,
        }
    }

    /// Labels as they should appear on screen, in `bars` order
    pub fn display_labels(&self, series: &ChartSeries) -> Vec<String> {
        series
            .bars
            .iter()
            .map(|bar| visual_order(&truncate_label(&bar.label, self.max_label_chars)))
            .collect()
    }

    /// Title as it should appear on screen; area names inside it may be Hebrew
    pub fn display_title(&self, series: &ChartSeries) -> String {
        visual_order(&series.title)
    }

    fn draw<DB>(
        &self,
        root: DrawingArea<DB, Shift>,
        config: &GraphConfig,
        series: &ChartSeries,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        fonts::register_family(&config.style.title_font.family)?;
        fonts::register_family(&config.style.label_font.family)?;
        root.fill(&self.get_background_color(config))?;

        let title_font = (
            config.style.title_font.family.as_str(),
            f64::from(config.style.title_font.size),
        );
        let label_font = (
            config.style.label_font.family.as_str(),
            f64::from(config.style.label_font.size),
        );

        let title = self.display_title(series);

        if series.is_empty() {
            let area = root.titled(&title, title_font)?;
            let (w, h) = area.dim_in_pixel();
            area.draw(&Text::new(
                "No data",
                (w as i32 / 2 - 30, h as i32 / 2),
                label_font.into_font().color(&BLACK),
            ))?;
            root.present()?;
            return Ok(());
        }

        let labels = self.display_labels(series);
        let count = labels.len();
        let rows = plot_rows(count);
        let x_max = x_axis_max(series);

        let mut chart = ChartBuilder::on(&root)
            .caption(&title, title_font)
            .margin(config.style.margins.top)
            .margin_right(config.style.margins.right)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(0.0..x_max, (0..rows - 1).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(series.x_label.as_str())
            .y_desc(series.y_label.as_str())
            .y_labels(rows)
            .y_label_formatter(&|y| label_for_segment(&labels, rows, y))
            .label_style(label_font)
            .axis_desc_style(label_font)
            .draw()?;

        let colors = self.get_colors(&config.style.color_scheme);
        let fill = colors.first().copied().unwrap_or(RGBColor(31, 119, 180));
        let margin = self.bar_margin;

        chart
            .draw_series(series.bars.iter().enumerate().map(|(i, bar)| {
                let slot = row_for(i, rows);
                let mut rect = Rectangle::new(
                    [
                        (0.0, SegmentValue::Exact(slot)),
                        (f64::from(bar.value), SegmentValue::Exact(slot + 1)),
                    ],
                    fill.filled(),
                );
                rect.set_margin(margin, margin, 0, 0);
                rect
            }))?
            .label(series.series_name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));

        if self.show_values {
            let offset = x_max * 0.005;
            chart.draw_series(series.bars.iter().enumerate().map(|(i, bar)| {
                Text::new(
                    bar.value.to_string(),
                    (
                        f64::from(bar.value) + offset,
                        SegmentValue::CenterOf(row_for(i, rows)),
                    ),
                    label_font.into_font().color(&BLACK),
                )
            }))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(label_font)
            .draw()?;

        root.present()?;
        debug!("Drew {} bars", count);
        Ok(())
    }
}

impl Default for HorizontalBarChart {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChartRenderer for HorizontalBarChart {
    #[instrument(skip(self, config, series), fields(title = %series.title, bars = series.bars.len()))]
    async fn render_to_file(
        &self,
        config: &GraphConfig,
        series: &ChartSeries,
        path: &Path,
    ) -> Result<()> {
        if path.extension().and_then(|e| e.to_str()) != Some("png") {
            return Err(RedAlertError::graph(format!(
                "unsupported image format: {}",
                path.display()
            )));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        self.draw(root, config, series)?;

        info!("Rendered chart to {}", path.display());
        Ok(())
    }

    /// Raw RGB8 pixels, row-major, `width * height * 3` bytes
    async fn render_to_bytes(&self, config: &GraphConfig, series: &ChartSeries) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; config.width as usize * config.height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (config.width, config.height))
                .into_drawing_area();
            self.draw(root, config, series)?;
        }
        Ok(buffer)
    }
}

/// Upper bound of the count axis with headroom for value labels
pub fn x_axis_max(series: &ChartSeries) -> f64 {
    (f64::from(series.max_value()) * 1.1).max(1.0)
}

/// Number of segments on the label axis.
///
/// An integer range `0..n` holds `n + 1` values, so the axis is built over
/// `0..rows - 1`. A single-valued range collapses in plotters, hence two rows
/// minimum; the lone bar then sits in the top row.
fn plot_rows(count: usize) -> usize {
    count.max(2)
}

/// Segment row of the bar at `index`; row 0 is the bottom of the plot
fn row_for(index: usize, rows: usize) -> usize {
    rows - 1 - index
}

fn label_for_segment(labels: &[String], rows: usize, value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(row) if *row < rows => labels
            .get(row_for(*row, rows))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bar;
    use tempfile::tempdir;

    fn series(bars: Vec<Bar>) -> ChartSeries {
        ChartSeries {
            title: "Number of alerts by hours".to_string(),
            x_label: "Number of alerts".to_string(),
            y_label: "Hour".to_string(),
            series_name: "Alerts".to_string(),
            bars,
        }
    }

    #[test]
    fn test_first_bar_on_top_row() {
        let labels = vec!["21".to_string(), "08".to_string(), "03".to_string()];
        let rows = plot_rows(labels.len());
        assert_eq!(rows, 3);
        assert_eq!(row_for(0, rows), 2);
        assert_eq!(label_for_segment(&labels, rows, &SegmentValue::CenterOf(2)), "21");
        assert_eq!(label_for_segment(&labels, rows, &SegmentValue::CenterOf(0)), "03");
        assert_eq!(label_for_segment(&labels, rows, &SegmentValue::CenterOf(3)), "");
        assert_eq!(label_for_segment(&labels, rows, &SegmentValue::Exact(1)), "");
    }

    #[test]
    fn test_single_bar_fills_top_row() {
        let labels = vec!["Sderot".to_string()];
        let rows = plot_rows(1);
        assert_eq!(rows, 2);
        assert_eq!(row_for(0, rows), 1);
        assert_eq!(label_for_segment(&labels, rows, &SegmentValue::CenterOf(1)), "Sderot");
        assert_eq!(label_for_segment(&labels, rows, &SegmentValue::CenterOf(0)), "");
    }

    #[test]
    fn test_bars_fill_every_row() {
        let rows = plot_rows(3);
        let slots: Vec<usize> = (0..3).map(|i| row_for(i, rows)).collect();
        assert_eq!(slots, vec![2, 1, 0]);
        assert_eq!(slots[0] + 1, rows);
    }

    #[test]
    fn test_display_title_reorders_hebrew_area() {
        let chart = HorizontalBarChart::new();
        let mut hours = series(vec![Bar::new("21", 1)]);
        assert_eq!(chart.display_title(&hours), "Number of alerts by hours");

        hours.title = "Number of alerts by hours in שדרות".to_string();
        let title = chart.display_title(&hours);
        assert!(title.starts_with("Number of alerts by hours in "));
        assert!(title.ends_with("תורדש"));
    }

    #[test]
    fn test_x_axis_headroom() {
        assert_eq!(x_axis_max(&series(vec![])), 1.0);
        let max = x_axis_max(&series(vec![Bar::new("a", 10), Bar::new("b", 4)]));
        assert!((max - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_truncate_label_counts_chars() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("אשדוד - אזור תעשייה", 6), "אשדוד…");
    }

    #[test]
    fn test_display_labels_are_visual_order() {
        let chart = HorizontalBarChart::new();
        let labels = chart.display_labels(&series(vec![Bar::new("שדרות", 1), Bar::new("21", 2)]));
        assert_eq!(labels, vec!["תורדש".to_string(), "21".to_string()]);
    }

    #[test]
    fn test_rejects_non_png_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let chart = HorizontalBarChart::new();
        let result = tokio_test::block_on(chart.render_to_file(
            &GraphConfig::default(),
            &series(vec![Bar::new("21", 1)]),
            &path,
        ));
        assert!(result.is_err());
        assert!(!path.exists());
    }

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn test_render_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hours.png");
        let chart = HorizontalBarChart::new();
        let mut hours = series(vec![Bar::new("21", 1), Bar::new("08", 2)]);
        hours.title = "Number of alerts by hours in שדרות".to_string();
        chart
            .render_to_file(&GraphConfig::default(), &hours, &path)
            .await
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[tokio::test]
    async fn test_render_empty_series_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        HorizontalBarChart::new()
            .render_to_file(&GraphConfig::default(), &series(vec![]), &path)
            .await
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[tokio::test]
    async fn test_render_to_bytes_draws_bars() {
        let config = GraphConfig {
            width: 640,
            height: 400,
            ..GraphConfig::default()
        };
        let chart = HorizontalBarChart::new();
        let bar = chart.get_colors(&config.style.color_scheme)[0];

        let empty = chart.render_to_bytes(&config, &series(vec![])).await.unwrap();
        assert_eq!(empty.len(), 640 * 400 * 3);

        let filled = chart
            .render_to_bytes(&config, &series(vec![Bar::new("21", 5), Bar::new("08", 3)]))
            .await
            .unwrap();
        assert_eq!(filled.len(), 640 * 400 * 3);

        let has_bar_pixel = |buf: &[u8]| {
            buf.chunks_exact(3)
                .any(|px| px == [bar.0, bar.1, bar.2])
        };
        assert!(has_bar_pixel(&filled));
        assert!(!has_bar_pixel(&empty));
    }
}
