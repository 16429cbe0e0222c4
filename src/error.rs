//! Error handling for entrocheck
//!
//! A single error type covers every failure the check can hit: I/O on the
//! counts stream, a histogram of the wrong shape, and the degenerate
//! all-zero distribution whose entropy is undefined.

use crate::ALPHABET_SIZE;
use thiserror::Error;

/// Error type for all entrocheck operations
#[derive(Error, Debug)]
pub enum EntrocheckError {
    /// I/O errors (reading the counts stream)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrong number of counts supplied
    #[error("expected exactly {expected} byte counts, found {found}")]
    CountMismatch { expected: usize, found: usize },

    /// A count is negative and cannot be a frequency
    #[error("count for byte value {index} is negative ({value})")]
    NegativeCount { index: usize, value: i64 },

    /// Every count is zero, so the probability distribution is undefined
    #[error("all counts are zero; entropy is undefined for an empty sample")]
    DegenerateDistribution,
}

impl EntrocheckError {
    /// Create a CountMismatch error for an observed sequence length
    pub fn count_mismatch(found: usize) -> Self {
        Self::CountMismatch {
            expected: ALPHABET_SIZE,
            found,
        }
    }

    /// Create a NegativeCount error for the offending entry
    pub fn negative_count(index: usize, value: i64) -> Self {
        Self::NegativeCount { index, value }
    }
}

/// Result type alias for entrocheck operations
pub type Result<T> = std::result::Result<T, EntrocheckError>;
