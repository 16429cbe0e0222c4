//! Shannon entropy over a byte-frequency histogram, and the pass/fail rule.

use std::fmt;

use crate::ENTROPY_THRESHOLD_BITS;
use crate::error::{EntrocheckError, Result};
use crate::histogram::Histogram;

/// Compute the Shannon entropy of a histogram, in bits.
///
/// H = -Σ p * log2(p) over the non-zero counts, with p = count / total.
/// Zero counts carry no probability mass and are skipped so log2 is never
/// evaluated at 0. The result lies in [0, 8]: 0 when a single byte value
/// holds every observation, 8 when all 256 counts are equal and non-zero.
///
/// Fails on an all-zero histogram, where the distribution is undefined.
pub fn shannon_entropy(histogram: &Histogram) -> Result<f64> {
    let total = histogram.total();
    if total == 0 {
        return Err(EntrocheckError::DegenerateDistribution);
    }

    let total = total as f64;
    let entropy = histogram
        .counts()
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    Ok(entropy)
}

/// Outcome of the randomness sanity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Apply the fixed threshold: strictly more than 7.99 bits passes,
    /// exactly 7.99 does not.
    pub fn from_entropy(entropy: f64) -> Self {
        if entropy > ENTROPY_THRESHOLD_BITS {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("PASS"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}
