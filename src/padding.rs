//! Zero padding for transforms that only accept power-of-two lengths.
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;
use tracing::debug;

use crate::error::ensure_not_empty;
use crate::error::Result;
use crate::radix2::fft;
use crate::sample::Sample;
use crate::spectrum::Spectrum;

/// Lifts `samples` onto the complex plane and appends zeros up to the next power of two.
///
/// A sequence whose length already is a power of two is copied without padding.
///
/// # Errors
/// Returns [`TransformError::EmptyInput`](crate::TransformError::EmptyInput) if `samples` is
/// empty.
pub fn pad_to_power_of_two<S: Sample>(samples: &[S]) -> Result<Vec<Complex<S::Real>>> {
    ensure_not_empty(samples.len())?;

    let padded_length = samples.len().next_power_of_two();
    let mut padded = Vec::with_capacity(padded_length);
    padded.extend(samples.iter().map(|sample| sample.to_complex()));
    if padded_length != samples.len() {
        debug!(
            original_length = samples.len(),
            padded_length, "zero padding samples to the next power of two"
        );
        padded.resize(padded_length, Complex::zero());
    }
    Ok(padded)
}

/// Zero pad `samples` to the next power of two and hand the result to `transform`.
///
/// The returned spectrum has one bin per *padded* sample, so for a signal that needed padding it
/// holds more bins than the signal held samples and bin `k` sits at `k / padded_length` of the
/// sample rate. The unpadded length is available through [`Spectrum::original_length`].
///
/// Works with any of the transforms in this crate, or a closure with the same signature.
///
/// # Errors
/// Returns [`TransformError::EmptyInput`](crate::TransformError::EmptyInput) if `samples` is
/// empty, and passes on any error `transform` returns.
///
/// ```
/// use radixfft::dft;
/// use radixfft::fft;
/// use radixfft::pad_and_transform;
/// use radixfft::TransformError;
///
/// let signal = [0.5_f64, 0.7, 0.3, 0.56, 0.56];
/// assert_eq!(fft(&signal), Err(TransformError::InvalidLength { length: 5 }));
///
/// let spectrum = pad_and_transform(&signal, dft).unwrap();
/// assert_eq!(spectrum.len(), 8);
/// assert_eq!(spectrum.original_length(), 5);
/// ```
pub fn pad_and_transform<S, F>(samples: &[S], transform: F) -> Result<Spectrum<S::Real>>
where
    S: Sample,
    F: FnOnce(&[Complex<S::Real>]) -> Result<Spectrum<S::Real>>,
{
    let padded = pad_to_power_of_two(samples)?;
    let spectrum = transform(&padded)?;
    Ok(spectrum.with_original_length(samples.len()))
}

/// Shorthand for [`pad_and_transform`] with [`fft`].
///
/// # Errors
/// Returns [`TransformError::EmptyInput`](crate::TransformError::EmptyInput) if `samples` is
/// empty.
pub fn padded_fft<S: Sample>(samples: &[S]) -> Result<Spectrum<S::Real>> {
    pad_and_transform(samples, fft)
}
