//! Cell address parsing and column letter encoding

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "R14", or a bare column "P")
///
/// The column is kept as its letters; turning it into an index is the job of
/// the sheet's [`ColumnMap`](crate::ColumnMap), which only knows the columns
/// the first row actually populated. The row is 1-based and absent for bare
/// column letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellAddress {
    /// Column letters (A, B, ..., Z, AA, ...)
    pub column: String,
    /// Row number (1-based), `None` for a bare column
    pub row: Option<u32>,
}

impl CellAddress {
    /// Create an address pointing at a single cell
    pub fn new<S: Into<String>>(column: S, row: u32) -> Self {
        Self {
            column: column.into(),
            row: Some(row),
        }
    }

    /// Create an address naming a whole column
    pub fn column<S: Into<String>>(column: S) -> Self {
        Self {
            column: column.into(),
            row: None,
        }
    }

    /// Parse an address made of uppercase column letters and an optional row
    ///
    /// # Examples
    /// ```
    /// use cellsheet_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("R14").unwrap();
    /// assert_eq!(addr.column, "R");
    /// assert_eq!(addr.row, Some(14));
    ///
    /// let addr = CellAddress::parse("AO").unwrap();
    /// assert_eq!(addr.column, "AO");
    /// assert_eq!(addr.row, None);
    ///
    /// assert!(CellAddress::parse("r14").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_uppercase() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let column = &s[..pos];
        let row_str = &s[pos..];

        if row_str.is_empty() {
            return Ok(Self::column(column));
        }

        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "unexpected characters after column in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self::new(column, row))
    }

    /// Row number, or an error when the address names a whole column
    pub fn require_row(&self) -> Result<u32> {
        self.row
            .ok_or_else(|| Error::InvalidAddress(format!("no row number in '{}'", self)))
    }
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}{}", self.column, row),
            None => write!(f, "{}", self.column),
        }
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
