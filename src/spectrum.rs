//! The result of a transform.
use rustfft::num_complex::Complex;
use std::ops::Deref;

#[cfg(feature = "serde")]
use crate::error::TransformError;
use crate::sample::Real;

/// The result of calling any of the transforms in this crate.
///
/// Dereferences to the complex frequency bins. Bin `k` holds the coefficient of the basis function
/// `exp(-2πi·k·n/N)` where `N` is [`len`](slice::len), the number of bins.
///
/// When the transform ran behind [`crate::pad_and_transform`], `N` is the padded length, which is
/// larger than the number of samples the caller handed in. That original length is kept in the
/// spectrum so the caller can map bins back onto frequencies of the unpadded signal. Note the bin
/// spacing is `sample_rate / N`, not `sample_rate / original_length`; see
/// [`Spectrum::bin_frequency`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpectrum<T>"))]
pub struct Spectrum<T> {
    original_length: usize,
    inner: Box<[Complex<T>]>,
}

/// Unchecked wire form of a [`Spectrum`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpectrum<T> {
    original_length: usize,
    inner: Box<[Complex<T>]>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawSpectrum<T>> for Spectrum<T> {
    type Error = TransformError;

    fn try_from(raw: RawSpectrum<T>) -> Result<Self, Self::Error> {
        check_lengths(raw.original_length, raw.inner.len())?;
        Ok(Self {
            original_length: raw.original_length,
            inner: raw.inner,
        })
    }
}

/// A transform yields one bin per sample, or one per sample after padding to a power of two.
#[cfg(feature = "serde")]
fn check_lengths(original_length: usize, bins: usize) -> Result<(), TransformError> {
    let padded = original_length
        .checked_next_power_of_two()
        .is_some_and(|padded| padded == bins);
    if original_length == 0 || !(original_length == bins || padded) {
        return Err(TransformError::InconsistentSpectrum {
            original_length,
            bins,
        });
    }
    Ok(())
}

impl<T> Spectrum<T> {
    pub(crate) fn from_bins(inner: Box<[Complex<T>]>) -> Self {
        Self {
            original_length: inner.len(),
            inner,
        }
    }

    pub(crate) fn with_original_length(mut self, original_length: usize) -> Self {
        self.original_length = original_length;
        self
    }

    /// Number of samples in the signal before any zero padding was applied.
    #[must_use]
    pub fn original_length(&self) -> usize {
        self.original_length
    }

    /// Whether zeros were appended to the signal before it was transformed.
    #[must_use]
    pub fn is_padded(&self) -> bool {
        self.original_length != self.inner.len()
    }

    /// Consumes the spectrum, returning the bare frequency bins.
    #[must_use]
    pub fn into_bins(self) -> Box<[Complex<T>]> {
        self.inner
    }
}

impl<T: Real> Spectrum<T> {
    /// Frequency in Hz that bin `bin` corresponds to for a signal sampled at `sample_rate` Hz.
    ///
    /// ```
    /// use radixfft::pad_and_transform;
    /// use radixfft::fft;
    ///
    /// // Six samples get padded to eight bins, so bins are 1/8th of the sample rate apart.
    /// let spectrum = pad_and_transform(&[1.0_f64; 6], fft).unwrap();
    /// assert_eq!(spectrum.original_length(), 6);
    /// assert_eq!(spectrum.bin_frequency(1, 800.0), 100.0);
    /// ```
    #[must_use]
    pub fn bin_frequency(&self, bin: usize, sample_rate: T) -> T {
        T::from_index(bin) * sample_rate / T::from_index(self.inner.len())
    }
}

impl<T> Deref for Spectrum<T> {
    type Target = [Complex<T>];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<[Complex<T>]> for Spectrum<T> {
    fn as_ref(&self) -> &[Complex<T>] {
        &self.inner
    }
}

impl<T> From<Spectrum<T>> for Vec<Complex<T>> {
    fn from(spectrum: Spectrum<T>) -> Self {
        spectrum.inner.into_vec()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::dft;
    use crate::pad_and_transform;

    #[test]
    fn lengths_must_come_from_a_transform() {
        assert_eq!(check_lengths(5, 5), Ok(()));
        assert_eq!(check_lengths(5, 8), Ok(()));
        assert_eq!(check_lengths(8, 8), Ok(()));
        for (original_length, bins) in [(100, 1), (5, 16), (9, 8), (0, 0), (usize::MAX, 1)] {
            assert_eq!(
                check_lengths(original_length, bins),
                Err(TransformError::InconsistentSpectrum {
                    original_length,
                    bins
                })
            );
        }
    }

    #[test]
    fn padded_spectrum_survives_a_round_trip() {
        let spectrum = pad_and_transform(&[0.5_f64, 0.7, 0.3, 0.56, 0.56], dft).unwrap();
        let json = serde_json::to_string(&spectrum).unwrap();
        let restored: Spectrum<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), spectrum.len());
        for (restored, original) in restored.iter().zip(spectrum.iter()) {
            approx::assert_relative_eq!(restored.re, original.re, max_relative = 1e-15);
            approx::assert_relative_eq!(restored.im, original.im, max_relative = 1e-15);
        }
        assert_eq!(restored.original_length(), 5);
        assert!(restored.is_padded());
    }

    #[test]
    fn signal_longer_than_the_bins_is_rejected() {
        let json = r#"{"original_length":100,"inner":[[1.0,0.0]]}"#;
        let error = serde_json::from_str::<Spectrum<f64>>(json).unwrap_err();
        assert!(error.to_string().contains("100 samples"), "{error}");
    }

    #[test]
    fn empty_spectrum_is_rejected() {
        let json = r#"{"original_length":0,"inner":[]}"#;
        assert!(serde_json::from_str::<Spectrum<f64>>(json).is_err());
    }
}
