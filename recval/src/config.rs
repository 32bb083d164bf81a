//! Run configuration for the checksum computer.

/// Default variant identifier stamped into the result record.
pub const DEFAULT_VARIANT: u32 = 21;

/// How a data row's enumeration index is adjusted before being recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndexMode {
    /// Enumeration index minus one: the first data row records as `-1`.
    ///
    /// Published checksums were computed with this shift, so it stays the
    /// default even though the mapping to file lines is off by one.
    #[default]
    Legacy,
    /// Unshifted 0-based enumeration index: the first data row records
    /// as `0`. Checksums are not comparable with [`IndexMode::Legacy`].
    ZeroBased,
}

impl IndexMode {
    /// Map a 0-based enumeration index to the recorded index.
    #[must_use]
    pub fn adjust(self, row_id: usize) -> i64 {
        let id = i64::try_from(row_id).unwrap_or(i64::MAX);
        match self {
            Self::Legacy => id - 1,
            Self::ZeroBased => id,
        }
    }
}

/// Configuration for a single checksum run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Variant identifier copied into the result record. External
    /// configuration, never derived from the data.
    pub variant: u32,
    /// Row index adjustment mode.
    pub index_mode: IndexMode,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            variant: DEFAULT_VARIANT,
            index_mode: IndexMode::default(),
        }
    }
}
