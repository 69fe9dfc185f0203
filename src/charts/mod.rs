//! Chart renderers
//!
//! Three independent raster artifacts drawn from the re-read table:
//! - `stacked.rs`: monthly emissions by scope, stacked bars
//! - `intensity.rs`: intensity trend, 2030 target line, linear fit overlay
//! - `quality.rs`: data quality proportions
//!
//! All charts share the report palette below. Each renderer wraps its
//! plotting errors into a single `Chart` variant; the drawing backends have
//! their own error types and we only need the message.

use plotters::style::RGBColor;

pub mod intensity;
pub mod quality;
pub mod stacked;

/// Fixed artifact filenames under the screenshots directory
pub const STACKED_CHART_FILE: &str = "emissions_by_scope_stacked.png";
pub const INTENSITY_CHART_FILE: &str = "emissions_intensity_trend.png";
pub const QUALITY_CHART_FILE: &str = "data_quality_distribution.png";

/// 2030 emissions intensity target in tCO2e per tonne steel
pub const INTENSITY_TARGET: f64 = 0.70;

// Report palette
pub const SCOPE1_COLOR: RGBColor = RGBColor(0xD3, 0x2F, 0x2F);
pub const SCOPE2_COLOR: RGBColor = RGBColor(0x19, 0x76, 0xD2);
pub const SCOPE3_COLOR: RGBColor = RGBColor(0x38, 0x8E, 0x3C);
pub const TARGET_COLOR: RGBColor = RGBColor(0xFF, 0x6F, 0x00);
pub const TREND_COLOR: RGBColor = RGBColor(0x80, 0x80, 0x80);
pub const MEASURED_COLOR: RGBColor = RGBColor(0x2E, 0x7D, 0x32);
pub const CALCULATED_COLOR: RGBColor = RGBColor(0xFF, 0xA7, 0x26);
pub const ESTIMATED_COLOR: RGBColor = RGBColor(0xEF, 0x53, 0x50);

/// Label an integer x position from the slice, blanking non-integer ticks
pub(crate) fn index_label(dates: &[String], x: &f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 0.25 || rounded < 0.0 {
        return String::new();
    }
    dates
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}
