//! # cellsheet-core
//!
//! Core data structures for the cellsheet library.
//!
//! This crate provides spreadsheet-style addressing over an in-memory grid of
//! string cells:
//! - [`CellAddress`] - Cell addresses such as "R14" or bare columns such as "P"
//! - [`ColumnMap`] - Column letter <-> index mapping derived from the first row
//! - [`ColumnRange`] and [`RowRange`] - Range specifiers ("P3-15", "9-11")
//! - [`Worksheet`] - The grid and its cell, column and row queries
//!
//! ## Example
//!
//! ```rust
//! use cellsheet_core::Worksheet;
//!
//! let sheet = Worksheet::from_rows(vec![
//!     vec!["Symbol".into(), "Pays".into()],
//!     vec!["H1".into(), "100".into()],
//!     vec!["H2".into(), "80".into()],
//!     vec!["".into(), "".into()],
//! ]);
//!
//! assert_eq!(sheet.cell("B2").unwrap(), "100");
//!
//! // Column A from row 2, trailing empty values trimmed
//! let symbols = sheet.column("A2").unwrap();
//! assert_eq!(symbols.len(), 2);
//!
//! // Row 3 keyed by column letter
//! let rows = sheet.row_data("3", "A", None).unwrap();
//! assert_eq!(rows[&3].get("B"), Some("80"));
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod range;
pub mod row;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{column_to_letters, CellAddress};
pub use column::ColumnMap;
pub use error::{Error, Result};
pub use range::{ColumnRange, RowRange};
pub use row::RowValues;
pub use worksheet::Worksheet;
