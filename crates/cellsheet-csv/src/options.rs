//! CSV options

/// Options for reading CSV files
///
/// Every record is read as data: there is no header row, and rows of
/// differing width are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Trim whitespace around fields (default: false)
    pub trim: bool,
    /// Skip lines starting with this byte (default: none)
    pub comment: Option<u8>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
            comment: None,
        }
    }
}

impl CsvReadOptions {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set whether fields are trimmed
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the comment character
    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }
}
