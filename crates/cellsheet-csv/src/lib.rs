//! # cellsheet-csv
//!
//! CSV loader for cellsheet: tokenizes a CSV source with the `csv` crate and
//! materializes it as a [`Worksheet`](cellsheet_core::Worksheet).

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
