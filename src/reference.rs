//! Cross-checking the hand-written transforms against the [`rustfft`] crate.
//!
//! ### Example:
//! ```rust
//! use radixfft::fft;
//! use radixfft::reference::max_abs_difference;
//! use radixfft::reference::reference_fft;
//!
//! let signal = [0.5_f64, 0.7, 0.3, 0.56, 0.56, 0.34, 0.77, 0.34];
//! let expected = reference_fft(&signal).unwrap();
//! let actual = fft(&signal).unwrap();
//!
//! assert!(max_abs_difference(&expected, &actual).unwrap() < 1e-12);
//! ```
use rustfft::num_complex::Complex;

use crate::error::ensure_not_empty;
use crate::error::Result;
use crate::get_fft_algorithm;
use crate::sample::to_complex_buffer;
use crate::sample::Real;
use crate::sample::Sample;
use crate::spectrum::Spectrum;

/// Compute the discrete fourier transform of `samples` with [`rustfft`].
///
/// Unlike [`crate::fft`] any length is accepted. Plans are cached per thread, so repeated calls
/// with the same length only pay for planning once.
///
/// # Errors
/// Returns [`TransformError::EmptyInput`](crate::TransformError::EmptyInput) if `samples` is
/// empty.
pub fn reference_fft<S: Sample>(samples: &[S]) -> Result<Spectrum<S::Real>> {
    ensure_not_empty(samples.len())?;

    let mut buffer = to_complex_buffer(samples);
    get_fft_algorithm::<S::Real>(buffer.len()).process(&mut buffer);
    Ok(Spectrum::from_bins(buffer.into_boxed_slice()))
}

/// Largest distance on the complex plane between two bins with the same index.
///
/// Returns `None` when the spectra have different lengths.
#[must_use]
pub fn max_abs_difference<T: Real>(lhs: &[Complex<T>], rhs: &[Complex<T>]) -> Option<T> {
    if lhs.len() != rhs.len() {
        return None;
    }
    Some(
        lhs.iter()
            .zip(rhs)
            .map(|(lhs, rhs)| (lhs - rhs).norm())
            .fold(T::zero(), T::max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft;
    use crate::fft;
    use crate::fft_cooley_tukey;
    use crate::pad_and_transform;
    use crate::TransformError;

    const ACCEPTABLE_ERROR: f64 = 1e-9;

    const ARBITRARY_SIGNAL: [f64; 8] = [0.5, 0.7, 0.3, 0.56, 0.56, 0.34, 0.77, 0.34];
    const ARBITRARY_ODD_SIGNAL: [f64; 7] = [1.5, 3.0, 2.1, 3.2, 2.2, 3.1, 1.2];

    #[test]
    fn every_transform_matches_rustfft() {
        let expected = reference_fft(&ARBITRARY_SIGNAL).unwrap();
        for spectrum in [
            dft(&ARBITRARY_SIGNAL).unwrap(),
            fft(&ARBITRARY_SIGNAL).unwrap(),
            fft_cooley_tukey(&ARBITRARY_SIGNAL).unwrap(),
        ] {
            let difference = max_abs_difference(&expected, &spectrum).unwrap();
            assert!(difference < ACCEPTABLE_ERROR, "{difference}");
        }
    }

    #[test]
    fn naive_dft_matches_rustfft_for_odd_lengths() {
        let expected = reference_fft(&ARBITRARY_ODD_SIGNAL).unwrap();
        let actual = dft(&ARBITRARY_ODD_SIGNAL).unwrap();
        assert!(max_abs_difference(&expected, &actual).unwrap() < ACCEPTABLE_ERROR);
    }

    #[test]
    fn padded_transforms_match_rustfft_on_the_padded_signal() {
        let padded = crate::pad_to_power_of_two(&ARBITRARY_ODD_SIGNAL).unwrap();
        let expected = reference_fft(&padded).unwrap();
        let actual = pad_and_transform(&ARBITRARY_ODD_SIGNAL, fft).unwrap();
        assert!(max_abs_difference(&expected, &actual).unwrap() < ACCEPTABLE_ERROR);
    }

    #[test]
    fn repeated_calls_reuse_the_cached_plan() {
        let first = reference_fft(&ARBITRARY_SIGNAL).unwrap();
        let second = reference_fft(&ARBITRARY_SIGNAL).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_precision_plans_are_kept_apart() {
        let single: Vec<f32> = ARBITRARY_SIGNAL.iter().map(|&x| x as f32).collect();
        let single = reference_fft(&single).unwrap();
        let double = reference_fft(&ARBITRARY_SIGNAL).unwrap();
        for (single, double) in single.iter().zip(double.iter()) {
            approx::assert_abs_diff_eq!(f64::from(single.re), double.re, epsilon = 1e-5);
            approx::assert_abs_diff_eq!(f64::from(single.im), double.im, epsilon = 1e-5);
        }
    }

    #[test]
    fn difference_of_mismatched_lengths_is_none() {
        let short = [Complex::new(1.0_f64, 0.0)];
        let long = [Complex::new(1.0_f64, 0.0); 2];
        assert_eq!(max_abs_difference(&short, &long), None);
        assert_eq!(max_abs_difference(&long, &long), Some(0.0));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(reference_fft::<f64>(&[]), Err(TransformError::EmptyInput));
    }
}
