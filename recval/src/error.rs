//! Error types for a checksum run.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal error aborting the whole run.
///
/// There are no retries and no partial results: when any variant surfaces,
/// no result file is written.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The input or output file could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes are not valid UTF-16LE text.
    #[error("input is not valid UTF-16LE: {path}")]
    Encoding {
        /// Path of the undecodable input file.
        path: PathBuf,
    },

    /// The input table is malformed (for example a row whose field count
    /// differs from the header).
    #[error("malformed input table: {0}")]
    Parse(#[from] csv::Error),

    /// The canonical index list or the result record failed to serialize.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
