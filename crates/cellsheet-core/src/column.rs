//! Column letter mapping

use ahash::AHashMap;

use crate::cell::column_to_letters;
use crate::error::{Error, Result};

/// Bidirectional map between column letters and 0-based column indices
///
/// Built once from the width of the first row and never modified afterwards.
/// Letters are assigned in order: A, B, ..., Z, AA, AB, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    /// Index -> letters
    letters: Vec<String>,
    /// Letters -> index
    indices: AHashMap<String, usize>,
}

impl ColumnMap {
    /// Create a map covering `width` columns
    pub fn with_width(width: usize) -> Self {
        let letters: Vec<String> = (0..width).map(column_to_letters).collect();
        let indices = letters
            .iter()
            .enumerate()
            .map(|(index, letter)| (letter.clone(), index))
            .collect();

        Self { letters, indices }
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if no column is mapped
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Look up the index of a column letter
    pub fn index_of(&self, letter: &str) -> Result<usize> {
        self.indices
            .get(letter)
            .copied()
            .ok_or_else(|| Error::UnknownColumn(letter.to_string()))
    }

    /// Look up the letter of a column index
    pub fn letter_of(&self, index: usize) -> Option<&str> {
        self.letters.get(index).map(String::as_str)
    }

    /// Check whether a letter is mapped
    pub fn contains(&self, letter: &str) -> bool {
        self.indices.contains_key(letter)
    }

    /// Letter of the last mapped column
    pub fn last_letter(&self) -> Option<&str> {
        self.letters.last().map(String::as_str)
    }

    /// Iterate over `(index, letter)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(index, letter)| (index, letter.as_str()))
    }
}
