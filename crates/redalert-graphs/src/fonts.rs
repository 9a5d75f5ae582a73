//! Bundled font for chart text
//!
//! The bitmap backend has no access to system fonts, so every family a chart
//! names is backed by DejaVu Sans, which covers Latin and Hebrew.

use plotters::style::{register_font, FontFamily, FontStyle};
use redalert_common::{RedAlertError, Result};
use tracing::debug;

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Make `family` resolvable by plotters text rendering
pub fn register_family(family: &str) -> Result<()> {
    // generic names such as "Sans-Serif" resolve to plotters' lowercase canonical ones
    let name = FontFamily::from(family).as_str().to_string();
    register_font(&name, FontStyle::Normal, DEJAVU_SANS).map_err(|_| {
        RedAlertError::graph(format!("bundled font could not be registered as '{}'", family))
    })?;
    debug!(family = %name, "Registered chart font");
    Ok(())
}
