//! Recursive radix-2 decimation-in-time FFT.
//!
//! Both public transforms in this module compute the same thing with the same butterfly. [`fft`]
//! recurses over strided views of the input and writes both half spectra straight into the two
//! halves of a single output buffer, so no intermediate sub-sequences are allocated.
//! [`fft_cooley_tukey`] splits the input into owned even and odd sequences and concatenates the
//! sum and difference halves, which mirrors the textbook presentation of the algorithm.
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;
use tracing::trace;

use crate::error::ensure_power_of_two;
use crate::error::Result;
use crate::sample::to_complex_buffer;
use crate::sample::twiddle;
use crate::sample::Real;
use crate::sample::Sample;
use crate::spectrum::Spectrum;

/// Half-length from which [`fft`] transforms the even and odd halves on separate rayon tasks.
///
/// Only used with the `parallel` feature.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Compute the discrete fourier transform of `samples` in `O(N log N)`.
///
/// `samples.len()` must be a power of two. Use [`crate::pad_and_transform`] for other lengths.
///
/// # Errors
/// Returns [`TransformError::EmptyInput`](crate::TransformError::EmptyInput) if `samples` is
/// empty and [`TransformError::InvalidLength`](crate::TransformError::InvalidLength) if its length
/// is not a power of two.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use radixfft::fft;
/// use radixfft::TransformError;
///
/// let spectrum = fft(&[1.0_f64, 0.0, 0.0, 0.0]).unwrap();
/// for bin in spectrum.iter() {
///     assert_abs_diff_eq!(bin.re, 1.0, epsilon = 1e-12);
///     assert_abs_diff_eq!(bin.im, 0.0, epsilon = 1e-12);
/// }
///
/// assert_eq!(
///     fft(&[1.0_f64; 5]),
///     Err(TransformError::InvalidLength { length: 5 })
/// );
/// ```
pub fn fft<S: Sample>(samples: &[S]) -> Result<Spectrum<S::Real>> {
    ensure_power_of_two(samples.len())?;
    trace!(length = samples.len(), "radix-2 fft");

    let input = to_complex_buffer(samples);
    let mut output = vec![Complex::zero(); input.len()];
    radix2_into(&input, &mut output);
    Ok(Spectrum::from_bins(output.into_boxed_slice()))
}

/// Compute the discrete fourier transform of `samples` with the classic Cooley-Tukey recursion.
///
/// Produces the same spectrum as [`fft`] but materializes the even and odd sub-sequences at every
/// level of the recursion.
///
/// # Errors
/// Same as [`fft`].
#[doc(alias = "fft_cooley_turkey")]
pub fn fft_cooley_tukey<S: Sample>(samples: &[S]) -> Result<Spectrum<S::Real>> {
    ensure_power_of_two(samples.len())?;
    trace!(length = samples.len(), "cooley-tukey fft");

    let bins = cooley_tukey(&to_complex_buffer(samples));
    Ok(Spectrum::from_bins(bins.into_boxed_slice()))
}

/// Writes the FFT of `input` into `output`.
///
/// Both slices must have the same power-of-two length.
pub(crate) fn radix2_into<T: Real>(input: &[Complex<T>], output: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(output.len().is_power_of_two());
    transform_strided(input, 0, 1, output);
}

/// Transforms the `output.len()` samples `input[start]`, `input[start + stride]`, ... into
/// `output`.
fn transform_strided<T: Real>(
    input: &[Complex<T>],
    start: usize,
    stride: usize,
    output: &mut [Complex<T>],
) {
    let len = output.len();
    if len == 1 {
        output[0] = input[start];
        return;
    }

    let (even, odd) = output.split_at_mut(len / 2);
    transform_halves(input, start, stride, even, odd);

    for (k, (even, odd)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
        (*even, *odd) = butterfly(*even, *odd, twiddle(k, len));
    }
}

#[cfg(not(feature = "parallel"))]
fn transform_halves<T: Real>(
    input: &[Complex<T>],
    start: usize,
    stride: usize,
    even: &mut [Complex<T>],
    odd: &mut [Complex<T>],
) {
    transform_strided(input, start, stride * 2, even);
    transform_strided(input, start + stride, stride * 2, odd);
}

#[cfg(feature = "parallel")]
fn transform_halves<T: Real>(
    input: &[Complex<T>],
    start: usize,
    stride: usize,
    even: &mut [Complex<T>],
    odd: &mut [Complex<T>],
) {
    if even.len() < PARALLEL_THRESHOLD {
        transform_strided(input, start, stride * 2, even);
        transform_strided(input, start + stride, stride * 2, odd);
        return;
    }

    rayon::join(
        || transform_strided(input, start, stride * 2, even),
        || transform_strided(input, start + stride, stride * 2, odd),
    );
}

fn cooley_tukey<T: Real>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let len = input.len();
    if len == 1 {
        return input.to_vec();
    }

    let even: Vec<_> = input.iter().step_by(2).copied().collect();
    let odd: Vec<_> = input.iter().skip(1).step_by(2).copied().collect();
    let even = cooley_tukey(&even);
    let odd = cooley_tukey(&odd);

    let (sums, differences): (Vec<_>, Vec<_>) = even
        .iter()
        .zip(&odd)
        .enumerate()
        .map(|(k, (even, odd))| butterfly(*even, *odd, twiddle(k, len)))
        .unzip();
    [sums, differences].concat()
}

/// Merges bin `k` of the even and odd half spectra into bins `k` and `k + N/2`.
#[inline]
fn butterfly<T: Real>(
    even: Complex<T>,
    odd: Complex<T>,
    twiddle: Complex<T>,
) -> (Complex<T>, Complex<T>) {
    let rotated = twiddle * odd;
    (even + rotated, even - rotated)
}
