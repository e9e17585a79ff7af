//! Prelude module - common imports for cellsheet users
//!
//! ```rust
//! use cellsheet::prelude::*;
//! ```

pub use crate::{
    // Addressing
    CellAddress,
    ColumnMap,
    ColumnRange,
    RowRange,
    RowValues,

    // I/O types
    CsvReadOptions,
    CsvReader,

    // Error types
    Error,
    Result,

    // Main types
    Worksheet,
    // Extension traits
    WorksheetExt,
};
