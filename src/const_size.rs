//! Provides an easy transform api for arrays.
//!
//! The array length is known at compile time, so the length checks the slice functions perform at
//! runtime happen during compilation instead and the transforms here cannot fail.
//!
//! ### Example:
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use radixfft::num_complex::Complex;
//! use radixfft::const_size::Dft;
//! use radixfft::const_size::Fft;
//!
//! // Define a complex-valued signal
//! let complex_signal = [Complex::new(1.0_f64, 0.0); 8];
//!
//! // Call `.fft()` on the signal to obtain it's discrete fourier transform
//! let complex_signal_fft: [Complex<f64>; 8] = complex_signal.fft();
//! // `.dft()` computes the same spectrum the slow way
//! let complex_signal_dft: [Complex<f64>; 8] = complex_signal.dft();
//!
//! for (fast, slow) in complex_signal_fft.iter().zip(complex_signal_dft) {
//!     assert_abs_diff_eq!(fast.re, slow.re, epsilon = 1e-12);
//!     assert_abs_diff_eq!(fast.im, slow.im, epsilon = 1e-12);
//! }
//! ```
//!
//! Calling `.fft()` on an array whose length is not a power of two, or either method on an empty
//! array, fails to build:
//! ```compile_fail
//! use radixfft::const_size::Fft;
//!
//! let _ = [1.0_f64; 3].fft();
//! ```
//! ```compile_fail
//! use radixfft::const_size::Dft;
//!
//! let _ = [0.0_f64; 0].dft();
//! ```
use array_init::map_array_init;

use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;

use crate::dft::dft_into;
use crate::radix2::radix2_into;
use crate::sample::Sample;

/// A trait for computing naive DFT's on structs representing signals with a size known at
/// compile time.
pub trait Dft<T, const SIZE: usize> {
    /// Compute the `O(N²)` DFT of a signal with input and output size `SIZE`.
    fn dft(&self) -> [Complex<T>; SIZE];
}

/// A trait for performing fast DFT's on structs representing signals with a power-of-two size
/// known at compile time.
pub trait Fft<T, const SIZE: usize> {
    /// Perform a radix-2 FFT on a signal with input and output size `SIZE`.
    fn fft(&self) -> [Complex<T>; SIZE];
}

struct AssertNotEmpty<const SIZE: usize>;

impl<const SIZE: usize> AssertNotEmpty<SIZE> {
    const OK: () = assert!(SIZE > 0, "cannot transform an empty array");
}

struct AssertPowerOfTwo<const SIZE: usize>;

impl<const SIZE: usize> AssertPowerOfTwo<SIZE> {
    const OK: () = assert!(
        SIZE.is_power_of_two(),
        "radix-2 transform requires a power-of-two array length"
    );
}

impl<S: Sample, const SIZE: usize> Dft<S::Real, SIZE> for [S; SIZE] {
    fn dft(&self) -> [Complex<S::Real>; SIZE] {
        let () = AssertNotEmpty::<SIZE>::OK;

        let input = map_array_init(self, |sample| sample.to_complex());
        let mut output = [Complex::zero(); SIZE];
        dft_into(&input, &mut output);
        output
    }
}

impl<S: Sample, const SIZE: usize> Fft<S::Real, SIZE> for [S; SIZE] {
    fn fft(&self) -> [Complex<S::Real>; SIZE] {
        let () = AssertPowerOfTwo::<SIZE>::OK;

        let input = map_array_init(self, |sample| sample.to_complex());
        let mut output = [Complex::zero(); SIZE];
        radix2_into(&input, &mut output);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ARBITRARY_EVEN_TEST_ARRAY: [f64; 8] = [1.5, 3.0, 2.1, 3.2, 2.2, 3.1, 1.2, 0.4];
    const ARBITRARY_ODD_TEST_ARRAY: [f64; 7] = [1.5, 3.0, 2.1, 3.2, 2.2, 3.1, 1.2];

    const ACCEPTABLE_ERROR: f64 = 0.000_000_001;

    fn arrays_match_slices<const SIZE: usize>(array: [f64; SIZE]) {
        let from_slice = crate::dft(&array).unwrap();
        let from_array = array.dft();
        assert_eq!(from_slice.len(), from_array.len());
        for (slice, array) in from_slice.iter().zip(from_array) {
            assert_abs_diff_eq!(slice.re, array.re, epsilon = ACCEPTABLE_ERROR);
            assert_abs_diff_eq!(slice.im, array.im, epsilon = ACCEPTABLE_ERROR);
        }
    }

    #[test]
    fn arrays_match_slices_even() {
        arrays_match_slices(ARBITRARY_EVEN_TEST_ARRAY);
    }

    #[test]
    fn arrays_match_slices_odd() {
        arrays_match_slices(ARBITRARY_ODD_TEST_ARRAY);
    }

    #[test]
    fn fft_matches_dft() {
        let fast = ARBITRARY_EVEN_TEST_ARRAY.fft();
        let slow = ARBITRARY_EVEN_TEST_ARRAY.dft();
        for (fast, slow) in fast.iter().zip(slow) {
            assert_abs_diff_eq!(fast.re, slow.re, epsilon = ACCEPTABLE_ERROR);
            assert_abs_diff_eq!(fast.im, slow.im, epsilon = ACCEPTABLE_ERROR);
        }
    }

    #[test]
    fn single_element_arrays_are_their_own_transform() {
        let array = [Complex::new(0.5_f32, 2.0)];
        assert_eq!(array.fft(), array);
        assert_eq!(array.dft(), array);
    }
}
