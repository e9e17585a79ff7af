//! Range specifiers for column and row queries
//!
//! Both ranges use a dash between the bounds:
//! - column ranges: `P`, `P4`, `P3-15` (column letters, optional start row,
//!   optional end row)
//! - row ranges: `9`, `9-11`

use std::fmt;
use std::str::FromStr;

use crate::cell::CellAddress;
use crate::error::{Error, Result};

/// A span of rows within a single column (e.g., "P3-15")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnRange {
    /// Column letters
    pub column: String,
    /// First row (1-based, inclusive)
    pub start_row: u32,
    /// Last row (inclusive), `None` = to the end of the sheet
    pub end_row: Option<u32>,
}

impl ColumnRange {
    /// Create a range from `start_row` to the end of the sheet
    pub fn from_row<S: Into<String>>(column: S, start_row: u32) -> Self {
        Self {
            column: column.into(),
            start_row,
            end_row: None,
        }
    }

    /// Parse a column range token
    ///
    /// The left side is a cell address whose row (default 1) is the start
    /// row; the right side, if any, is the end row number.
    ///
    /// # Examples
    /// ```
    /// use cellsheet_core::ColumnRange;
    ///
    /// let range = ColumnRange::parse("P3-15").unwrap();
    /// assert_eq!(range.column, "P");
    /// assert_eq!(range.start_row, 3);
    /// assert_eq!(range.end_row, Some(15));
    /// assert_eq!(range.row_count(), Some(13));
    ///
    /// let range = ColumnRange::parse("P").unwrap();
    /// assert_eq!(range.start_row, 1);
    /// assert_eq!(range.end_row, None);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (left, right) = split_bounds(s)?;

        let start = CellAddress::parse(left)?;
        let start_row = start.row.unwrap_or(1);

        let end_row = match right {
            Some(right) => {
                let end = parse_row_number(right, s)?;
                if end < start_row {
                    return Err(Error::InvalidRange(format!(
                        "end row {} is before start row {} in '{}'",
                        end, start_row, s
                    )));
                }
                Some(end)
            }
            None => None,
        };

        Ok(Self {
            column: start.column,
            start_row,
            end_row,
        })
    }

    /// Number of rows spanned, if the range is bounded
    pub fn row_count(&self) -> Option<u32> {
        self.end_row.map(|end| end - self.start_row + 1)
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.start_row)?;
        if let Some(end) = self.end_row {
            write!(f, "-{}", end)?;
        }
        Ok(())
    }
}

impl FromStr for ColumnRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An inclusive span of rows (e.g., "9-11")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowRange {
    /// First row (1-based, inclusive)
    pub start: u32,
    /// Last row (inclusive)
    pub end: u32,
}

impl RowRange {
    /// Create a range covering a single row
    pub fn single(row: u32) -> Self {
        Self {
            start: row,
            end: row,
        }
    }

    /// Parse a row range token: a row number or a dash-joined pair
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (left, right) = split_bounds(s)?;

        let start = parse_row_number(left, s)?;
        let end = match right {
            Some(right) => parse_row_number(right, s)?,
            None => start,
        };

        if end < start {
            return Err(Error::InvalidRange(format!(
                "end row {} is before start row {} in '{}'",
                end, start, s
            )));
        }

        Ok(Self { start, end })
    }

    /// Check whether the range names exactly one row
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl From<u32> for RowRange {
    fn from(row: u32) -> Self {
        Self::single(row)
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for RowRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split a token on its single dash
fn split_bounds(s: &str) -> Result<(&str, Option<&str>)> {
    match s.split_once('-') {
        Some((_, right)) if right.contains('-') => Err(Error::InvalidRange(format!(
            "more than one '-' in '{}'",
            s
        ))),
        Some((left, right)) => Ok((left.trim(), Some(right.trim()))),
        None => Ok((s, None)),
    }
}

fn parse_row_number(s: &str, token: &str) -> Result<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidRange(format!(
            "expected a row number, got '{}' in '{}'",
            s, token
        )));
    }

    match s.parse::<u32>() {
        Ok(0) => Err(Error::InvalidRange(format!(
            "row numbers start at 1 in '{}'",
            token
        ))),
        Ok(row) => Ok(row),
        Err(_) => Err(Error::InvalidRange(format!(
            "row number out of range in '{}'",
            token
        ))),
    }
}
