//! # recval
//!
//! Record field validation and invalid-row checksumming.
//!
//! The crate holds two cooperating pieces: a [`FieldValidator`] with a
//! fixed registry of per-field patterns, and a checksum computer that
//! scans a `;`-delimited UTF-16LE table, records the adjusted indices of
//! rows with invalid fields, and digests the sorted index list into an
//! MD5 fingerprint.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use recval::{CheckConfig, check_file, output};
//!
//! # fn main() -> Result<(), recval::CheckError> {
//! let config = CheckConfig::default();
//! let report = check_file(Path::new("21.csv"), &config)?;
//! println!("rows scanned: {}", report.rows_scanned);
//! println!("checksum: {}", report.checksum);
//! output::write_result(Path::new("result.json"), &report)?;
//! # Ok(())
//! # }
//! ```

pub mod checksum;
mod config;
mod error;
pub mod output;
mod report;
mod table;
mod validator;

pub use config::{CheckConfig, DEFAULT_VARIANT, IndexMode};
pub use error::CheckError;
pub use report::{CheckReport, ResultRecord};
pub use table::{FIELD_DELIMITER, ParsedTable, read_rows};
pub use validator::FieldValidator;

use std::path::Path;

use checksum::{checksum_of, invalid_row_indices};

/// Run the full check: read and decode the input table, validate every
/// field of every data row, and digest the adjusted invalid-row indices.
///
/// This is the primary public API. The run is a single linear pass with
/// no retries and no partial results.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if the input cannot be read,
/// [`CheckError::Encoding`] if it is not valid UTF-16LE,
/// [`CheckError::Parse`] on malformed rows, and
/// [`CheckError::Serialize`] if the canonical index list cannot be
/// serialized.
pub fn check_file(path: &Path, config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let table = read_rows(path)?;
    let validator = FieldValidator::new();
    let mut invalid_indices = invalid_row_indices(&table, &validator, config.index_mode);
    let checksum = checksum_of(&mut invalid_indices)?;
    Ok(CheckReport {
        variant: config.variant,
        checksum,
        rows_scanned: table.rows.len(),
        invalid_indices,
    })
}
