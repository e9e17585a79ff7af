//! Row types

/// Values of one row, keyed by column letter in column order
///
/// Returned by [`Worksheet::row_data`](crate::Worksheet::row_data). Entries
/// keep the order of the columns they came from, so "AA" follows "Z".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValues {
    entries: Vec<(String, String)>,
}

impl RowValues {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell, keeping column order
    pub fn push<L: Into<String>, V: Into<String>>(&mut self, letter: L, value: V) {
        self.entries.push((letter.into(), value.into()));
    }

    /// Get a value by column letter
    pub fn get(&self, letter: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == letter)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(letter, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(letter, value)| (letter.as_str(), value.as_str()))
    }

    /// Column letters present in this row
    pub fn letters(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(letter, _)| letter.as_str())
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of cells in row
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<L, V> FromIterator<(L, V)> for RowValues
where
    L: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(letter, value)| (letter.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RowValues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (letter, value) in &self.entries {
            map.serialize_entry(letter, value)?;
        }
        map.end()
    }
}
