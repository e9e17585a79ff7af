//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use cellsheet_core::Worksheet;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a worksheet
    ///
    /// Fails with [`CsvError::FileAccess`] before any parsing if the file
    /// cannot be opened.
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CsvError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loading CSV from {}", path.display());
        Self::read(file, options)
    }

    /// Read CSV from a reader into a worksheet
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .comment(options.comment)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut wider_rows = 0usize;

        for result in csv_reader.records() {
            let record = result?;
            let fields: Vec<String> = record.iter().map(str::to_string).collect();

            // The first row fixes which columns get letters
            if let Some(first) = rows.first() {
                if fields.len() > first.len() {
                    wider_rows += 1;
                }
            }

            rows.push(fields);
        }

        if wider_rows > 0 {
            tracing::warn!(
                "{} row(s) are wider than the first row; extra cells have no column letter",
                wider_rows
            );
        }

        let worksheet = Worksheet::from_rows(rows);
        tracing::debug!(
            "Loaded {} rows x {} columns",
            worksheet.row_count(),
            worksheet.column_count()
        );

        Ok(worksheet)
    }
}
