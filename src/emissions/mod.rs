//! Emissions dataset module
//!
//! Structure:
//! - `series.rs`: MonthlyRecord and the seeded series generator
//! - `table.rs`: validated, immutable 24-row table
//! - `aggregate.rs`: annual and data-quality rollups
//! - `workbook.rs`: XLSX write / read-back boundary
//! - `error.rs`: error types

pub mod aggregate;
pub mod error;
pub mod series;
pub mod table;
pub mod workbook;

// Re-exports for convenience
pub use error::{EmissionsError, Result};
pub use series::{MonthlyRecord, SeriesGenerator, REPORT_MONTHS};
pub use table::EmissionsTable;
