//! # cellsheet
//!
//! Spreadsheet-style access to CSV files.
//!
//! A CSV file is loaded once into an immutable [`Worksheet`]; its data is then
//! addressed the way a spreadsheet user would: cells as `"R14"`, column spans
//! as `"P3-15"`, row spans as `"9-11"`. Column letters (A, B, ..., Z, AA, ...)
//! are assigned from the width of the first row. All values stay strings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cellsheet::prelude::*;
//!
//! let sheet = Worksheet::open("paytable.csv")?;
//!
//! // A single cell
//! let name = sheet.cell("C2")?;
//!
//! // Column P from row 3 to 15, empty tail trimmed
//! let combos = sheet.column("P3-15")?;
//!
//! // Rows 9 to 11, columns P through U, keyed by letter
//! let rows = sheet.row_data("9-11", "P", Some("U"))?;
//! println!("{} {:?} {:?}", name, combos.get(&3), rows[&9].get("U"));
//! # Ok::<(), cellsheet::Error>(())
//! ```

pub mod prelude;

// Re-export core types
pub use cellsheet_core::{
    column_to_letters,
    // Addressing
    CellAddress,
    ColumnMap,
    ColumnRange,
    // Error types
    Error,
    Result,
    RowRange,
    RowValues,

    // Main types
    Worksheet,
};

// Re-export I/O types
pub use cellsheet_csv::{CsvError, CsvReadOptions, CsvReader};

use std::path::Path;

/// Extension trait for Worksheet to add file I/O
pub trait WorksheetExt: Sized {
    /// Open a CSV file with default options
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Open a CSV file with custom options
    fn open_with_options<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Self>;
}

impl WorksheetExt for Worksheet {
    fn open<P: AsRef<Path>>(path: P) -> Result<Worksheet> {
        Self::open_with_options(path, &CsvReadOptions::default())
    }

    fn open_with_options<P: AsRef<Path>>(
        path: P,
        options: &CsvReadOptions,
    ) -> Result<Worksheet> {
        Ok(CsvReader::read_file(path, options)?)
    }
}
