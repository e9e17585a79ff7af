//! Cell addressing
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "R14") or a bare column ("P")
//! - [`column_to_letters`] - Column index to letter encoding

mod address;

pub use address::{column_to_letters, CellAddress};
