//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::CellAddress;
use crate::column::ColumnMap;
use crate::error::{Error, Result};
use crate::range::{ColumnRange, RowRange};
use crate::row::RowValues;

/// An immutable grid of string cells addressed by column letter and row number
///
/// Rows are 1-based. The column letters come from the width of the first row;
/// later rows may be shorter or longer and are kept exactly as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    /// Row fields, row `n` at index `n - 1`
    rows: Vec<Vec<String>>,
    /// Column letters derived from the first row
    columns: ColumnMap,
}

impl Worksheet {
    /// Build a worksheet from raw rows in file order
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.first().map_or(0, Vec::len);

        Self {
            rows,
            columns: ColumnMap::with_width(width),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Number of columns addressable by letter
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The column letter map
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Raw fields of a row (1-based)
    pub fn row(&self, row: u32) -> Option<&[String]> {
        let index = row.checked_sub(1)? as usize;
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate over `(row number, fields)` in file order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[String])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, fields)| (index as u32 + 1, fields.as_slice()))
    }

    /// Get a value by 1-based row and 0-based column index
    pub fn value_at(&self, row: u32, col: usize) -> Option<&str> {
        self.row(row)?.get(col).map(String::as_str)
    }

    /// Get the value of a single cell (e.g., "R14")
    ///
    /// The address must carry a row number; a bare column letter is rejected.
    ///
    /// # Examples
    /// ```
    /// use cellsheet_core::Worksheet;
    ///
    /// let sheet = Worksheet::from_rows(vec![
    ///     vec!["id".into(), "name".into()],
    ///     vec!["1".into(), "Wild".into()],
    /// ]);
    /// assert_eq!(sheet.cell("B2").unwrap(), "Wild");
    /// assert!(sheet.cell("B").is_err());
    /// ```
    pub fn cell(&self, address: &str) -> Result<&str> {
        let addr = CellAddress::parse(address)?;
        self.cell_at(&addr)
    }

    /// Get the value at a parsed address
    pub fn cell_at(&self, addr: &CellAddress) -> Result<&str> {
        let row = addr.require_row()?;
        let col = self.columns.index_of(&addr.column)?;
        let fields = self.row(row).ok_or(Error::RowNotFound(row))?;

        fields
            .get(col)
            .map(String::as_str)
            .ok_or_else(|| Error::ColumnNotFound {
                column: addr.column.clone(),
                row,
            })
    }

    /// Get column data with the empty tail trimmed
    ///
    /// Shorthand for [`column_data(range, true)`](Self::column_data).
    pub fn column(&self, range: &str) -> Result<BTreeMap<u32, String>> {
        self.column_data(range, true)
    }

    /// Get data from a column
    ///
    /// Accepted formats:
    /// - `"P"` - every row of column P
    /// - `"P4"` - column P from row 4 to the end
    /// - `"P3-15"` - column P, rows 3 through 15 inclusive
    ///
    /// Keys are the original row numbers. With `trim_empty_tail`, trailing
    /// empty values are dropped; a column with no value at all is reduced to
    /// its first entry.
    pub fn column_data(
        &self,
        range: &str,
        trim_empty_tail: bool,
    ) -> Result<BTreeMap<u32, String>> {
        let range = ColumnRange::parse(range)?;
        self.column_range(&range, trim_empty_tail)
    }

    /// Get data from a parsed column range
    pub fn column_range(
        &self,
        range: &ColumnRange,
        trim_empty_tail: bool,
    ) -> Result<BTreeMap<u32, String>> {
        let col = self.columns.index_of(&range.column)?;
        let last_row = self.row_count();
        let end_row = range.end_row.map_or(last_row, |end| end.min(last_row));

        tracing::trace!(
            "column range {} resolved to index {}, rows {}..={}",
            range,
            col,
            range.start_row,
            end_row
        );

        let mut data = BTreeMap::new();
        for row in range.start_row..=end_row {
            let value = self.value_at(row, col).ok_or_else(|| Error::ColumnNotFound {
                column: range.column.clone(),
                row,
            })?;
            data.insert(row, value.to_string());
        }

        if trim_empty_tail {
            trim_empty_tail_in_place(&mut data);
        }

        Ok(data)
    }

    /// Get data from one or more rows, keyed by column letter
    ///
    /// `rows` is either a row number (`"9"`) or an inclusive pair (`"9-11"`).
    /// The column window starts at `column_start` and runs to `column_end`,
    /// or to the end of each row when `column_end` is `None`.
    pub fn row_data(
        &self,
        rows: &str,
        column_start: &str,
        column_end: Option<&str>,
    ) -> Result<BTreeMap<u32, RowValues>> {
        let range = RowRange::parse(rows)?;
        self.row_range(range, column_start, column_end)
    }

    /// Get data from a parsed row range
    pub fn row_range(
        &self,
        range: RowRange,
        column_start: &str,
        column_end: Option<&str>,
    ) -> Result<BTreeMap<u32, RowValues>> {
        if self.row(range.start).is_none() {
            return Err(Error::RowNotFound(range.start));
        }
        // A single row must exist; a longer span is clipped to the sheet
        let end_row = range.end.min(self.row_count());

        let start_col = self.columns.index_of(column_start)?;
        let end_col = match column_end {
            Some(letter) => {
                let end_col = self.columns.index_of(letter)?;
                if end_col < start_col {
                    return Err(Error::InvalidRange(format!(
                        "column {} is before column {}",
                        letter, column_start
                    )));
                }
                end_col
            }
            None => self.columns.len() - 1,
        };

        tracing::trace!(
            "row range {} resolved to columns {}..={}",
            range,
            start_col,
            end_col
        );

        let mut data = BTreeMap::new();
        for row in range.start..=end_row {
            let fields = self.row(row).ok_or(Error::RowNotFound(row))?;
            let values: RowValues = fields
                .iter()
                .enumerate()
                .take(end_col + 1)
                .skip(start_col)
                .filter_map(|(col, value)| {
                    self.columns
                        .letter_of(col)
                        .map(|letter| (letter, value.as_str()))
                })
                .collect();
            data.insert(row, values);
        }

        Ok(data)
    }
}

impl FromIterator<Vec<String>> for Worksheet {
    fn from_iter<I: IntoIterator<Item = Vec<String>>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}

/// Drop entries after the last non-empty value
///
/// When every value is empty only the first entry survives.
fn trim_empty_tail_in_place(data: &mut BTreeMap<u32, String>) {
    let Some(&first) = data.keys().next() else {
        return;
    };

    let last_non_empty = data
        .iter()
        .rev()
        .find(|(_, value)| !value.is_empty())
        .map_or(first, |(&row, _)| row);

    data.retain(|&row, _| row <= last_non_empty);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet(rows: &[&[&str]]) -> Worksheet {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn column(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
        entries
            .iter()
            .map(|(row, value)| (*row, value.to_string()))
            .collect()
    }

    fn sample() -> Worksheet {
        sheet(&[
            &["", "name", "pays"],
            &["1", "H1", "100"],
            &["2", "H2", ""],
            &["3", "", ""],
            &["4", "", "5"],
            &["5", "", ""],
        ])
    }

    #[test]
    fn test_dimensions() {
        let ws = sample();
        assert_eq!(ws.row_count(), 6);
        assert_eq!(ws.column_count(), 3);
        assert_eq!(ws.columns().last_letter(), Some("C"));
        assert_eq!(ws.row(0), None);
        assert_eq!(ws.row(7), None);
        assert_eq!(ws.row(2).unwrap()[1], "H1");
        assert_eq!(ws.rows().count(), 6);
    }

    #[test]
    fn test_cell() {
        let ws = sample();
        assert_eq!(ws.cell("B2").unwrap(), "H1");
        assert_eq!(ws.cell("A1").unwrap(), "");
        assert_eq!(ws.cell("C5").unwrap(), "5");
    }

    #[test]
    fn test_cell_errors() {
        let ws = sample();
        assert!(matches!(ws.cell("B"), Err(Error::InvalidAddress(_))));
        assert!(matches!(ws.cell("b2"), Err(Error::InvalidAddress(_))));
        assert!(matches!(ws.cell("D1"), Err(Error::UnknownColumn(c)) if c == "D"));
        assert!(matches!(ws.cell("A7"), Err(Error::RowNotFound(7))));
    }

    #[test]
    fn test_cell_in_short_row() {
        let ws = sheet(&[&["a", "b", "c"], &["x"]]);
        assert!(matches!(
            ws.cell("C2"),
            Err(Error::ColumnNotFound { ref column, row: 2 }) if column == "C"
        ));
        assert_eq!(ws.cell("A2").unwrap(), "x");
    }

    #[test]
    fn test_column_trims_empty_tail() {
        let ws = sample();
        assert_eq!(
            ws.column("B").unwrap(),
            column(&[(1, "name"), (2, "H1"), (3, "H2")])
        );
        // Empty values in the middle are kept
        assert_eq!(
            ws.column("C").unwrap(),
            column(&[(1, "pays"), (2, "100"), (3, ""), (4, ""), (5, "5")])
        );
    }

    #[test]
    fn test_column_without_trim() {
        let ws = sample();
        let data = ws.column_data("B", false).unwrap();
        assert_eq!(data.len(), 6);
        assert_eq!(data[&6], "");
    }

    #[test]
    fn test_column_from_row() {
        let ws = sample();
        assert_eq!(
            ws.column("B2").unwrap(),
            column(&[(2, "H1"), (3, "H2")])
        );
    }

    #[test]
    fn test_column_bounded() {
        let ws = sample();
        assert_eq!(
            ws.column_data("A2-4", true).unwrap(),
            column(&[(2, "1"), (3, "2"), (4, "3")])
        );
        // Trim still applies to an explicit range
        assert_eq!(ws.column("B2-5").unwrap(), column(&[(2, "H1"), (3, "H2")]));
        // End past the last row is clipped
        assert_eq!(ws.column_data("A5-100", false).unwrap().len(), 2);
        // Start past the last row yields nothing
        assert!(ws.column_data("A10", false).unwrap().is_empty());
    }

    #[test]
    fn test_column_all_empty_keeps_first_entry() {
        let ws = sample();
        assert_eq!(ws.column("B4").unwrap(), column(&[(4, "")]));
        assert_eq!(ws.column("A1-1").unwrap(), column(&[(1, "")]));
    }

    #[test]
    fn test_column_errors() {
        let ws = sample();
        assert!(matches!(ws.column("Z"), Err(Error::UnknownColumn(_))));
        assert!(matches!(ws.column("B5-2"), Err(Error::InvalidRange(_))));

        let ragged = sheet(&[&["a", "b"], &["c", "d"], &["e"]]);
        assert!(matches!(
            ragged.column("B"),
            Err(Error::ColumnNotFound { row: 3, .. })
        ));
        assert_eq!(ragged.column("B1-2").unwrap(), column(&[(1, "b"), (2, "d")]));
    }

    #[test]
    fn test_row_data() {
        let ws = sample();
        let data = ws.row_data("2", "B", Some("C")).unwrap();

        assert_eq!(data.len(), 1);
        let expected: RowValues = [("B", "H1"), ("C", "100")].into_iter().collect();
        assert_eq!(data[&2], expected);
    }

    #[test]
    fn test_row_data_range() {
        let ws = sample();
        let data = ws.row_data("2-4", "A", None).unwrap();

        assert_eq!(data.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(data[&3].get("A"), Some("2"));
        assert_eq!(data[&3].get("C"), Some(""));
        assert_eq!(data[&4].len(), 3);
    }

    #[test]
    fn test_row_data_clips_to_sheet() {
        let ws = sample();
        let data = ws.row_data("5-9", "C", None).unwrap();
        assert_eq!(data.keys().copied().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn test_row_data_ragged_rows() {
        let ws = sheet(&[&["a", "b", "c"], &["x"], &["p", "q", "r", "s"]]);

        // Missing cells are absent, not defaulted
        let data = ws.row_data("2", "A", None).unwrap();
        assert_eq!(data[&2].letters().collect::<Vec<_>>(), vec!["A"]);

        // Cells beyond the first row's width have no letter
        let data = ws.row_data("3", "B", None).unwrap();
        assert_eq!(data[&3].letters().collect::<Vec<_>>(), vec!["B", "C"]);
    }

    #[test]
    fn test_row_data_errors() {
        let ws = sample();
        assert!(matches!(ws.row_data("7", "A", None), Err(Error::RowNotFound(7))));
        assert!(matches!(ws.row_data("7-9", "A", None), Err(Error::RowNotFound(7))));
        assert!(matches!(ws.row_data("2", "D", None), Err(Error::UnknownColumn(_))));
        assert!(matches!(
            ws.row_data("2", "C", Some("A")),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(ws.row_data("x", "A", None), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let ws = sample();
        assert_eq!(ws.column("C").unwrap(), ws.column("C").unwrap());
        assert_eq!(
            ws.row_data("1-3", "A", Some("B")).unwrap(),
            ws.row_data("1-3", "A", Some("B")).unwrap()
        );
        assert_eq!(ws.cell("B3").unwrap(), ws.cell("B3").unwrap());
    }

    #[test]
    fn test_empty_sheet() {
        let ws = Worksheet::from_rows(Vec::new());
        assert!(ws.is_empty());
        assert_eq!(ws.column_count(), 0);
        assert!(matches!(ws.cell("A1"), Err(Error::UnknownColumn(_))));
        assert!(matches!(ws.row_data("1", "A", None), Err(Error::RowNotFound(1))));
    }
}
