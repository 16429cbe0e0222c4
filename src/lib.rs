pub mod entropy;
pub mod error;
pub mod histogram;
pub mod logging;

/// Number of distinct byte values a histogram covers.
pub const ALPHABET_SIZE: usize = 256;

/// Entropy, in bits, that a histogram must exceed to pass.
///
/// log2(256) = 8 bits is the theoretical maximum for a uniform distribution
/// over the byte alphabet; 7.99 leaves room for the sampling noise of a
/// finite draw while still demanding near-uniformity.
pub const ENTROPY_THRESHOLD_BITS: f64 = 7.99;

pub use entropy::{Verdict, shannon_entropy};
pub use error::{EntrocheckError, Result};
pub use histogram::{Histogram, read_counts};
