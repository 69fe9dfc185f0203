//! Dataset generator entry point
//!
//! Synthesizes the 24-month emissions table and writes the 4-sheet Excel
//! workbook under `data/`. Takes no arguments and reads no environment
//! variables; the run is fully reproducible.

use anyhow::{Context, Result};

use csrd_emissions::config::ReportConfig;
use csrd_emissions::pipeline;

fn main() -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("CSRD Climate Data Generator - Norrland Stål AB");
    println!("{}\n", "=".repeat(60));

    let config = ReportConfig::default();
    let table = pipeline::run_generator(&config).context("data generation failed")?;

    println!("\n{}", "=".repeat(60));
    println!("SUMMARY STATISTICS ({} months)", table.len());
    println!("{}", "=".repeat(60));
    println!("\nCompany: {}", config.company.name);
    println!("Location: {}", config.company.location);
    println!("Industry: {}\n", config.company.industry);
    println!("{}", table.totals());

    println!("\n{}", "=".repeat(60));
    println!("✓ Data generation complete!");
    println!("{}", "=".repeat(60));
    println!("\nOutput file: {}", config.workbook_path().display());
    println!("\nNext steps:");
    println!("1. Review data in Excel");
    println!("2. Run generate_visuals to render the charts");
    println!("3. Validate against ESRS E1 requirements");

    Ok(())
}
