//! Emissions intensity trend with the 2030 target and a linear fit overlay

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::emissions::error::{EmissionsError, Result};
use crate::emissions::EmissionsTable;

use super::{index_label, INTENSITY_TARGET, SCOPE1_COLOR, TARGET_COLOR, TREND_COLOR};

pub fn render(table: &EmissionsTable, path: &Path) -> Result<()> {
    draw(table, path).map_err(|e| EmissionsError::Chart(format!("intensity trend chart: {}", e)))
}

/// Least-squares line through (xs, ys); returns (slope, intercept).
/// A degenerate x spread falls back to a flat line through the mean.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let n = xs.len().min(ys.len()) as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return (0.0, sum_y / n);
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    (slope, intercept)
}

fn draw(table: &EmissionsTable, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let records = table.records();
    let dates: Vec<String> = records.iter().map(|r| r.date.clone()).collect();
    let xs: Vec<f64> = (0..records.len()).map(|i| i as f64).collect();
    let ys: Vec<f64> = records.iter().map(|r| r.emissions_intensity).collect();

    let y_peak = ys.iter().copied().fold(INTENSITY_TARGET, f64::max);
    let y_max = y_peak * 1.15;
    let x_max = records.len() as f64 - 1.0;

    let root = BitMapBackend::new(path, (1280, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Emissions Intensity Trend - Norrland Stål AB",
            ("sans-serif", 24),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(records.len() / 2)
        .x_label_formatter(&|x| index_label(&dates, x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .x_desc("Month")
        .y_desc("Emissions Intensity (tCO2e per tonne steel)")
        .label_style(("sans-serif", 14))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(ys.iter().copied()),
            SCOPE1_COLOR.stroke_width(3),
        ))?
        .label("Actual Emissions Intensity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], SCOPE1_COLOR.stroke_width(3)));

    chart.draw_series(
        xs.iter()
            .copied()
            .zip(ys.iter().copied())
            .map(|point| Circle::new(point, 4, SCOPE1_COLOR.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            [(0.0, INTENSITY_TARGET), (x_max, INTENSITY_TARGET)],
            8,
            4,
            TARGET_COLOR.stroke_width(2),
        ))?
        .label(format!("2030 Target: {:.2} tCO2e/tonne", INTENSITY_TARGET))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], TARGET_COLOR.stroke_width(2)));

    let (slope, intercept) = linear_fit(&xs, &ys);
    chart
        .draw_series(LineSeries::new(
            xs.iter().map(|x| (*x, slope * x + intercept)),
            TREND_COLOR.stroke_width(2),
        ))?
        .label("Linear Trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], TREND_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()?;
    Ok(())
}
