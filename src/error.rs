//! Errors returned by the transforms.
use thiserror::Error;

/// Result type for transform operations.
pub type Result<T, E = TransformError> = core::result::Result<T, E>;

/// Errors a transform can return.
///
/// Every variant describes a programmer error in the input handed over. Nothing is retried and no
/// partial spectrum is produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformError {
    /// The sample sequence holds no samples.
    #[error("cannot transform an empty sample sequence")]
    EmptyInput,

    /// A radix-2 transform was given a sequence whose length is not a power of two.
    #[error("radix-2 transform requires a power-of-two length, got {length}")]
    InvalidLength {
        /// Length of the rejected sequence.
        length: usize,
    },

    /// A spectrum's recorded signal length does not fit its number of bins.
    ///
    /// The bin count must equal the signal length, or be the power of two it was padded to.
    #[error("spectrum of {bins} bins cannot come from a signal of {original_length} samples")]
    InconsistentSpectrum {
        /// Claimed number of samples before padding.
        original_length: usize,
        /// Number of frequency bins.
        bins: usize,
    },
}

/// Rejects empty sequences.
pub(crate) fn ensure_not_empty(length: usize) -> Result<()> {
    if length == 0 {
        return Err(TransformError::EmptyInput);
    }
    Ok(())
}

/// Rejects empty and non-power-of-two sequences, in that order.
pub(crate) fn ensure_power_of_two(length: usize) -> Result<()> {
    ensure_not_empty(length)?;
    if !length.is_power_of_two() {
        return Err(TransformError::InvalidLength { length });
    }
    Ok(())
}
