//! The naive O(n²) discrete fourier transform.
use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;
use tracing::trace;

use crate::error::ensure_not_empty;
use crate::error::Result;
use crate::sample::to_complex_buffer;
use crate::sample::twiddle;
use crate::sample::Real;
use crate::sample::Sample;
use crate::spectrum::Spectrum;

/// Compute the discrete fourier transform of `samples` straight from its definition.
///
/// Every bin `k` is the sum over all samples `x[n] * exp(-2πi·k·n/N)`, so this runs in `O(N²)`.
/// Any length `N ≥ 1` is accepted. Mostly useful as a reference for the fast transforms.
///
/// # Errors
/// Returns [`TransformError::EmptyInput`](crate::TransformError::EmptyInput) if `samples` is
/// empty.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use radixfft::dft;
///
/// let spectrum = dft(&[1.0_f64, 1.0, 1.0]).unwrap();
/// assert_abs_diff_eq!(spectrum[0].re, 3.0, epsilon = 1e-12);
/// assert_abs_diff_eq!(spectrum[1].norm(), 0.0, epsilon = 1e-12);
/// assert_abs_diff_eq!(spectrum[2].norm(), 0.0, epsilon = 1e-12);
/// ```
pub fn dft<S: Sample>(samples: &[S]) -> Result<Spectrum<S::Real>> {
    ensure_not_empty(samples.len())?;
    trace!(length = samples.len(), "naive dft");

    let input = to_complex_buffer(samples);
    let mut output = vec![Complex::zero(); input.len()];
    dft_into(&input, &mut output);
    Ok(Spectrum::from_bins(output.into_boxed_slice()))
}

/// Writes the DFT of `input` into `output`. Both must have the same, non-zero, length.
pub(crate) fn dft_into<T: Real>(input: &[Complex<T>], output: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), output.len());
    let len = input.len();
    for (k, bin) in output.iter_mut().enumerate() {
        *bin = input
            .iter()
            .zip(kernel_indices(k, len))
            .map(|(sample, index)| *sample * twiddle(index, len))
            .sum();
    }
}

/// Yields `k·n mod len` for `n` in `0..len` without forming the product `k·n`.
///
/// Both `index` and `k` stay below `len`, so the running sum never overflows where `k·n` could.
fn kernel_indices(k: usize, len: usize) -> impl Iterator<Item = usize> {
    (0..len).scan(0, move |index, _| {
        let current = *index;
        *index = (*index + k) % len;
        Some(current)
    })
}
