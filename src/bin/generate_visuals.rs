//! Chart renderer entry point
//!
//! Reads the workbook produced by `generate_dataset` and renders the three
//! PNG artifacts under `powerbi/screenshots/`. If the workbook is missing it
//! reports the remediation and exits without creating anything.

use csrd_emissions::config::ReportConfig;
use csrd_emissions::emissions::EmissionsError;
use csrd_emissions::pipeline;

fn main() {
    println!("{}", "=".repeat(60));
    println!("CSRD Climate Visualization Generator");
    println!("{}\n", "=".repeat(60));

    let config = ReportConfig::default();
    match pipeline::run_visuals(&config) {
        Ok(artifacts) => {
            println!("\n{}", "=".repeat(60));
            println!("✓ All visualizations created!");
            println!("{}", "=".repeat(60));
            println!("\nOutput files:");
            for (i, path) in artifacts.iter().enumerate() {
                println!("{}. {}", i + 1, path.display());
            }
        }
        Err(EmissionsError::MissingInput(path)) => {
            eprintln!("✗ File not found: {}", path.display());
            eprintln!("Run generate_dataset first to create the Excel workbook.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ Visualization failed: {}", e);
            std::process::exit(1);
        }
    }
}
