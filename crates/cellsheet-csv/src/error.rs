//! CSV error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while loading a CSV file
#[derive(Debug, Error)]
pub enum CsvError {
    /// The file could not be opened
    #[error("Cannot open '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] cellsheet_core::Error),
}

impl From<CsvError> for cellsheet_core::Error {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::FileAccess { path, source } => Self::FileAccess { path, source },
            CsvError::Core(err) => err,
            other => Self::malformed(other.to_string()),
        }
    }
}
