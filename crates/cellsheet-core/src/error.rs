//! Error types for cellsheet-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying a sheet
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be opened or read
    #[error("Cannot access '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV tokenizer rejected the input
    #[error("Malformed CSV: {0}")]
    Malformed(String),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid row or column range
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Column letter beyond the width of the first row
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Row number not present in the sheet
    #[error("Row {0} not found")]
    RowNotFound(u32),

    /// Row exists but is too short to hold the column
    #[error("Column {column} not found in row {row}")]
    ColumnNotFound { column: String, row: u32 },
}

impl Error {
    /// Create a "malformed input" error with a message
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::Malformed(msg.into())
    }

    /// Whether this error comes from parsing an address or range token
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::InvalidAddress(_) | Error::InvalidRange(_))
    }
}
