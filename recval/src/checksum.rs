//! Invalid-row collection and checksum computation.
//!
//! The checksum is deterministic and independent of physical row order:
//! indices are sorted ascending before serialization, and the serialized
//! form is the compact JSON integer list (`[0,3,7]`, no spaces) hashed
//! with MD5 and rendered as lowercase hex.

use md5::{Digest, Md5};

use crate::config::IndexMode;
use crate::error::CheckError;
use crate::table::ParsedTable;
use crate::validator::FieldValidator;

/// Collect the adjusted indices of rows containing invalid fields.
///
/// One index is recorded per failing field, so a row with several invalid
/// fields contributes its index several times. Duplicates are kept and
/// take part in the checksum.
#[must_use]
pub fn invalid_row_indices(
    table: &ParsedTable,
    validator: &FieldValidator,
    mode: IndexMode,
) -> Vec<i64> {
    let mut indices = Vec::new();
    for (row_id, row) in table.rows.iter().enumerate() {
        for (column, value) in table.columns(row) {
            if !validator.validate(column, value) {
                indices.push(mode.adjust(row_id));
            }
        }
    }
    indices
}

/// Digest the index list: sort ascending in place, serialize as a compact
/// JSON array, MD5 over the UTF-8 bytes, lowercase hex.
///
/// # Errors
///
/// Returns [`CheckError::Serialize`] if the canonical list cannot be
/// serialized.
pub fn checksum_of(indices: &mut [i64]) -> Result<String, CheckError> {
    indices.sort_unstable();
    let canonical = serde_json::to_string(&*indices)?;
    let mut hasher = Md5::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
