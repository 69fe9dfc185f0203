use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating or rendering the dataset
#[derive(Debug, Error)]
pub enum EmissionsError {
    /// Filesystem error while touching an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook write error
    #[error("spreadsheet write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Workbook read error
    #[error("spreadsheet read error: {0}")]
    Read(#[from] calamine::XlsxError),

    /// The visualizer's input workbook does not exist
    #[error("input workbook not found: {0}")]
    MissingInput(PathBuf),

    /// A sheet did not have the expected shape (columns, row count, ordering)
    #[error("unexpected sheet shape: {0}")]
    Schema(String),

    /// Chart backend failure
    #[error("chart rendering error: {0}")]
    Chart(String),
}

/// Type alias for Results using EmissionsError
pub type Result<T> = std::result::Result<T, EmissionsError>;
