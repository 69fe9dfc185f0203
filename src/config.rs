//! Report configuration
//!
//! Everything a run needs lives in one struct with hard-coded defaults: the
//! tool takes no flags and reads no environment variables. The values mirror
//! the published company profile for the synthetic dataset.

use std::path::PathBuf;

/// Company profile written to the `Company_Info` sheet
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub location: String,
    pub reporting_period: String,
    pub production_capacity: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            name: "Norrland Stål AB".to_string(),
            industry: "Steel Manufacturing (NACE C24.10)".to_string(),
            location: "Luleå, Sweden".to_string(),
            reporting_period: "2023-2024".to_string(),
            production_capacity: "500,000 tonnes steel/year".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Company profile for the workbook's info sheet
    pub company: CompanyProfile,

    /// Seed for the synthetic series. Fixed so every run reproduces the
    /// same 24-row table.
    pub seed: u64,

    /// Directory the workbook is written to / read from
    pub data_dir: PathBuf,

    /// Workbook filename inside `data_dir`
    pub workbook_file: String,

    /// Directory the chart PNGs are written to
    pub screenshots_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            company: CompanyProfile::default(),
            seed: 42,
            data_dir: PathBuf::from("data"),
            workbook_file: "norrland_stal_emissions.xlsx".to_string(),
            screenshots_dir: PathBuf::from("powerbi/screenshots"),
        }
    }
}

impl ReportConfig {
    /// Full path of the Excel workbook
    pub fn workbook_path(&self) -> PathBuf {
        self.data_dir.join(&self.workbook_file)
    }

    /// Full path of a chart artifact inside the screenshots directory
    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.screenshots_dir.join(file_name)
    }
}
