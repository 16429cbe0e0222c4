//! Reading and validating byte-count histograms.
//!
//! The reader is deliberately lenient: any line that does not parse as an
//! integer is skipped, so blank lines and stray text in the stream do not
//! count for or against the expected 256 entries. Validation is strict:
//! exactly 256 entries, none negative.

use std::io::BufRead;

use tracing::debug;

use crate::ALPHABET_SIZE;
use crate::error::{EntrocheckError, Result};

/// Read byte counts from a line-oriented stream until end-of-input.
///
/// Each line is trimmed and parsed as a base-10 integer; lines that fail to
/// parse are discarded. Counts are parsed signed so a negative entry reaches
/// the validator and is rejected there instead of vanishing as a parse skip.
pub fn read_counts<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut counts = Vec::with_capacity(ALPHABET_SIZE);
    for line in reader.lines() {
        let line = line?;
        match line.trim().parse::<i64>() {
            Ok(count) => counts.push(count),
            Err(_) => debug!(line = line.trim(), "skipping unparseable line"),
        }
    }
    Ok(counts)
}

/// A validated 256-entry byte-frequency histogram.
///
/// Index i holds the observed frequency of byte value i. Only the multiset
/// of counts matters to the entropy computation; the index order is kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; ALPHABET_SIZE],
}

impl Histogram {
    /// Validate a raw count sequence into a histogram.
    ///
    /// Fails unless the sequence has exactly 256 entries, all non-negative.
    pub fn from_counts(raw: &[i64]) -> Result<Self> {
        if raw.len() != ALPHABET_SIZE {
            return Err(EntrocheckError::count_mismatch(raw.len()));
        }

        let mut counts = [0u64; ALPHABET_SIZE];
        for (index, &value) in raw.iter().enumerate() {
            if value < 0 {
                return Err(EntrocheckError::negative_count(index, value));
            }
            counts[index] = value as u64;
        }
        Ok(Self { counts })
    }

    /// Total number of observations across all byte values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Per-byte-value counts, indexed by byte value.
    pub fn counts(&self) -> &[u64; ALPHABET_SIZE] {
        &self.counts
    }
}
