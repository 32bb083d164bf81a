//! Result types for a checksum run.

use serde::{Deserialize, Serialize};

/// Outcome of a full checksum run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Variant identifier from the run configuration.
    pub variant: u32,
    /// Lowercase hex MD5 of the canonical sorted index list.
    pub checksum: String,
    /// Number of data rows scanned.
    pub rows_scanned: usize,
    /// Sorted adjusted indices of all invalid fields (duplicates kept).
    pub invalid_indices: Vec<i64>,
}

impl CheckReport {
    /// Number of recorded invalid-field indices.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.invalid_indices.len()
    }

    /// The terminal record written to the result file.
    #[must_use]
    pub fn result_record(&self) -> ResultRecord {
        ResultRecord {
            variant: self.variant,
            checksum: self.checksum.clone(),
        }
    }
}

/// The `{variant, checksum}` record written once as the sole content of
/// the result file. Terminal: there are no update semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Variant identifier.
    pub variant: u32,
    /// 32-character lowercase hex MD5 checksum.
    pub checksum: String,
}
