//! Input table decoding and parsing.
//!
//! The input is a `;`-delimited UTF-16LE text file with a header row; the
//! header names are the validator lookup keys for every data row. The whole
//! file is read and decoded before parsing. Any decode or parse failure is
//! fatal; there are no partial results.

use std::fs;
use std::path::Path;

use encoding_rs::UTF_16LE;

use crate::error::CheckError;

/// Field delimiter of the input table.
pub const FIELD_DELIMITER: u8 = b';';

/// A parsed input table: header names plus data rows in file order.
///
/// Every row holds exactly as many values as there are headers; a row with
/// a diverging field count never makes it into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParsedTable {
    /// Column names from the header row, in file order.
    pub headers: Vec<String>,
    /// Data rows; raw values aligned with `headers`.
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Iterate one row as `(column name, raw value)` pairs in header order.
    pub fn columns<'a>(
        &'a self,
        row: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(row.iter().map(String::as_str))
    }
}

/// Read and parse the input file.
///
/// A leading byte-order mark is tolerated and stripped by the decoder.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if the file cannot be read,
/// [`CheckError::Encoding`] if the content is not valid UTF-16LE, and
/// [`CheckError::Parse`] on malformed rows.
pub fn read_rows(path: &Path) -> Result<ParsedTable, CheckError> {
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = UTF_16LE.decode(&bytes);
    if had_errors {
        return Err(CheckError::Encoding {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(ParsedTable { headers, rows })
}
