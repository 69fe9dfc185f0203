//! Data quality proportions chart
//!
//! Left half: overall measured / calculated / estimated split as a pie.
//! Right half: the same tiers per scope as 100% stacked bars, which keeps
//! the eight tiny per-scope slices of the workbook readable.

use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;

use crate::emissions::aggregate::QualityBreakdown;
use crate::emissions::error::{EmissionsError, Result};

use super::{CALCULATED_COLOR, ESTIMATED_COLOR, MEASURED_COLOR};

pub fn render(quality: &[QualityBreakdown], path: &Path) -> Result<()> {
    draw(quality, path).map_err(|e| EmissionsError::Chart(format!("data quality chart: {}", e)))
}

fn draw(
    quality: &[QualityBreakdown],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1280, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Data Quality Assessment - Norrland Stål AB (ESRS E1)",
        ("sans-serif", 24),
    )?;
    let (left, right) = root.split_horizontally(640);

    // Overall split across all scopes
    let measured: f64 = quality.iter().map(|q| q.measured).sum();
    let calculated: f64 = quality.iter().map(|q| q.calculated).sum();
    let estimated: f64 = quality.iter().map(|q| q.estimated).sum();

    let sizes = vec![measured, calculated, estimated];
    let colors = vec![MEASURED_COLOR, CALCULATED_COLOR, ESTIMATED_COLOR];
    let labels = vec!["Measured", "Calculated", "Estimated"];

    let center = (320, 300);
    let radius = 200.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 16).into_font().color(&WHITE));
    left.draw(&pie)?;

    // Per-scope tiers as 100% stacked bars
    let mut chart = ChartBuilder::on(&right)
        .caption("Quality Tiers by Scope", ("sans-serif", 18))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(-0.5f64..(quality.len() as f64 - 0.5), 0f64..100f64)?;

    let scopes: Vec<String> = quality.iter().map(|q| q.scope.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(quality.len())
        .x_label_formatter(&|x| super::index_label(&scopes, x))
        .y_label_formatter(&|y| format!("{:.0}%", y))
        .y_desc("Share of scope total")
        .label_style(("sans-serif", 14))
        .draw()?;

    let tiers: [(&str, fn(&QualityBreakdown) -> f64, RGBColor); 3] = [
        ("Measured", |q| q.measured_percent, MEASURED_COLOR),
        ("Calculated", |q| q.calculated_percent, CALCULATED_COLOR),
        ("Estimated", |q| q.estimated_percent, ESTIMATED_COLOR),
    ];

    for (tier_index, (name, value, color)) in tiers.iter().enumerate() {
        let color = *color;
        chart
            .draw_series(quality.iter().enumerate().map(|(i, q)| {
                let base: f64 = tiers[..tier_index].iter().map(|(_, v, _)| v(q)).sum();
                let x = i as f64;
                Rectangle::new([(x - 0.3, base), (x + 0.3, base + value(q))], color.filled())
            }))?
            .label(*name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

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
