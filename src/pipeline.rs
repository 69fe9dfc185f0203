//! Shared report pipelines
//!
//! Two linear, single-pass pipelines that only meet at the workbook file:
//! 1. Generator: synthesize the table, derive the summary tables, write the
//!    4-sheet workbook.
//! 2. Visualizer: read the workbook's primary sheet back, render the three
//!    chart artifacts.
//!
//! Both entry points call in here; the binaries only add banners and exit
//! codes.

use std::fs;
use std::path::PathBuf;

use crate::charts;
use crate::config::ReportConfig;
use crate::emissions::error::{EmissionsError, Result};
use crate::emissions::{aggregate, workbook, EmissionsTable, SeriesGenerator};

/// Generate the dataset and write the workbook.
/// Returns the table so the caller can print summary statistics.
pub fn run_generator(config: &ReportConfig) -> Result<EmissionsTable> {
    println!("[1/3] Generating synthetic emissions data...");
    let mut generator = SeriesGenerator::new(config.seed);
    let table = generator.generate_table()?;
    println!("✓ Generated {} monthly records", table.len());

    println!("\n[2/3] Computing summary tables...");
    let annual = aggregate::annual_summary(&table);
    let quality = aggregate::quality_breakdown(&table);
    println!(
        "✓ {} reporting years, {} data quality rows",
        annual.len(),
        quality.len()
    );

    println!("\n[3/3] Writing Excel workbook...");
    fs::create_dir_all(&config.data_dir)?;
    let path = config.workbook_path();
    workbook::write_workbook(&table, &config.company, &annual, &quality, &path)?;
    println!("✓ Excel report created: {}", path.display());

    Ok(table)
}

/// Read the workbook back and render the three chart artifacts.
/// Aborts before creating anything if the workbook is missing.
pub fn run_visuals(config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let workbook_path = config.workbook_path();
    if !workbook_path.exists() {
        return Err(EmissionsError::MissingInput(workbook_path));
    }

    println!("Loading data from: {}", workbook_path.display());
    let table = workbook::read_emissions_sheet(&workbook_path)?;
    println!("✓ Loaded {} rows of emissions data\n", table.len());

    fs::create_dir_all(&config.screenshots_dir)?;
    let mut artifacts = Vec::new();

    println!("[1/3] Creating stacked bar chart...");
    let path = config.chart_path(charts::STACKED_CHART_FILE);
    charts::stacked::render(&table, &path)?;
    println!("✓ Created: {}", path.display());
    artifacts.push(path);

    println!("\n[2/3] Creating emissions intensity trend...");
    let path = config.chart_path(charts::INTENSITY_CHART_FILE);
    charts::intensity::render(&table, &path)?;
    println!("✓ Created: {}", path.display());
    artifacts.push(path);

    println!("\n[3/3] Creating data quality distribution...");
    let quality = aggregate::quality_breakdown(&table);
    let path = config.chart_path(charts::QUALITY_CHART_FILE);
    charts::quality::render(&quality, &path)?;
    println!("✓ Created: {}", path.display());
    artifacts.push(path);

    Ok(artifacts)
}
