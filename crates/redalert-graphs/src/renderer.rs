//! Chart rendering trait

use crate::{ChartSeries, ColorScheme, GraphConfig};
use plotters::prelude::*;
use redalert_common::Result;
use std::path::Path;

/// Trait for drawing a [`ChartSeries`] with configurable styling
#[async_trait::async_trait]
pub trait ChartRenderer {
    /// Render a chart to a PNG file
    async fn render_to_file(
        &self,
        config: &GraphConfig,
        series: &ChartSeries,
        path: &Path,
    ) -> Result<()>;

    /// Render a chart to raw RGB8 pixels, row-major, `width * height * 3` bytes
    async fn render_to_bytes(&self, config: &GraphConfig, series: &ChartSeries) -> Result<Vec<u8>>;

    /// Get colors from color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),
                RGBColor(255, 127, 14),
                RGBColor(44, 160, 44),
                RGBColor(214, 39, 40),
            ],
            ColorScheme::Custom(colors) => {
                let parsed: Vec<RGBColor> = colors.iter().map(|c| self.parse_color(c)).collect();
                if parsed.is_empty() {
                    vec![RGBColor(31, 119, 180)]
                } else {
                    parsed
                }
            }
        }
    }

    /// Parse a `#RRGGBB` string, black when malformed
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    #[async_trait::async_trait]
    impl ChartRenderer for Dummy {
        async fn render_to_file(&self, _: &GraphConfig, _: &ChartSeries, _: &Path) -> Result<()> {
            Ok(())
        }

        async fn render_to_bytes(&self, _: &GraphConfig, _: &ChartSeries) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Dummy.parse_color("#1F77B4"), RGBColor(31, 119, 180));
        assert_eq!(Dummy.parse_color("#ff0000"), RGBColor(255, 0, 0));
        assert_eq!(Dummy.parse_color("red"), RGBColor(0, 0, 0));
        assert_eq!(Dummy.parse_color("#12345"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_custom_scheme_falls_back_when_empty() {
        assert_eq!(Dummy.get_colors(&ColorScheme::Custom(vec![])).len(), 1);
        assert_eq!(
            Dummy.get_colors(&ColorScheme::Custom(vec!["#000000".to_string()])),
            vec![RGBColor(0, 0, 0)]
        );
    }

    #[test]
    fn test_background_color() {
        let mut config = GraphConfig::default();
        assert_eq!(Dummy.get_background_color(&config), RGBColor(255, 255, 255));
        config.style.background_color = None;
        assert_eq!(Dummy.get_background_color(&config), RGBColor(255, 255, 255));
        config.style.background_color = Some("#000000".to_string());
        assert_eq!(Dummy.get_background_color(&config), RGBColor(0, 0, 0));
    }
}
