//! Stacked bar chart: monthly emissions by scope

use std::path::Path;

use plotters::prelude::*;

use crate::emissions::error::{EmissionsError, Result};
use crate::emissions::EmissionsTable;

use super::{index_label, SCOPE1_COLOR, SCOPE2_COLOR, SCOPE3_COLOR};

pub fn render(table: &EmissionsTable, path: &Path) -> Result<()> {
    draw(table, path).map_err(|e| EmissionsError::Chart(format!("stacked scope chart: {}", e)))
}

fn draw(table: &EmissionsTable, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let records = table.records();
    let dates: Vec<String> = records.iter().map(|r| r.date.clone()).collect();
    let y_max = records
        .iter()
        .map(|r| r.total_emissions)
        .fold(0.0, f64::max)
        * 1.1;

    let root = BitMapBackend::new(path, (1280, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Monthly GHG Emissions by Scope - Norrland Stål AB",
            ("sans-serif", 24),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(-0.5f64..(records.len() as f64 - 0.5), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(records.len() / 2)
        .x_label_formatter(&|x| index_label(&dates, x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Month")
        .y_desc("GHG Emissions (tCO2e)")
        .label_style(("sans-serif", 14))
        .draw()?;

    // One stacked bar per month: scope 1 at the base, scope 3 on top
    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, r.scope1_total)], SCOPE1_COLOR.filled())
        }))?
        .label("Scope 1: Direct Emissions")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SCOPE1_COLOR.filled()));

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            let base = r.scope1_total;
            Rectangle::new(
                [(x - 0.4, base), (x + 0.4, base + r.scope2_total)],
                SCOPE2_COLOR.filled(),
            )
        }))?
        .label("Scope 2: Energy Indirect")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SCOPE2_COLOR.filled()));

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            let base = r.scope1_total + r.scope2_total;
            Rectangle::new(
                [(x - 0.4, base), (x + 0.4, base + r.scope3_total)],
                SCOPE3_COLOR.filled(),
            )
        }))?
        .label("Scope 3: Value Chain")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SCOPE3_COLOR.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font(("sans-serif", 14))
        .draw()?;

    root.present()?;
    Ok(())
}
