//! Provides an easy transform api for slices.
//!
//! ### Example:
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use radixfft::dyn_size::DynDft;
//! use radixfft::dyn_size::DynFft;
//! use radixfft::dyn_size::DynPaddedFft;
//!
//! // Define a real-valued signal and convert to a slice
//! let signal: &[f64] = &[1.0_f64; 6];
//!
//! // A length of 6 is fine for the naive DFT...
//! let signal_dft = signal.dft().unwrap();
//! // ...but the radix-2 FFT needs it padded to 8 first
//! assert!(signal.fft().is_err());
//! let signal_fft = signal.padded_fft().unwrap();
//!
//! assert_eq!(signal_dft.len(), 6);
//! assert_eq!(signal_fft.len(), 8);
//!
//! // Both see the same DC component
//! assert_abs_diff_eq!(signal_dft[0].re, 6.0, epsilon = 1e-12);
//! assert_abs_diff_eq!(signal_fft[0].re, 6.0, epsilon = 1e-12);
//! ```
use crate::error::Result;
use crate::sample::Sample;
use crate::spectrum::Spectrum;

/// A trait for computing naive DFT's on structs representing signals with a size not known at
/// compile time.
pub trait DynDft<T> {
    /// Compute the `O(N²)` DFT of the signal. See [`crate::dft`].
    ///
    /// # Errors
    /// Fails on an empty signal.
    fn dft(&self) -> Result<Spectrum<T>>;
}

/// A trait for performing fast DFT's on structs representing signals with a power-of-two size not
/// known at compile time.
pub trait DynFft<T> {
    /// Perform a radix-2 FFT on the signal. See [`crate::fft`].
    ///
    /// # Errors
    /// Fails on an empty signal or one whose length is not a power of two.
    fn fft(&self) -> Result<Spectrum<T>>;
}

/// A trait for performing fast DFT's on structs representing signals of any size, zero padding
/// them to the next power of two.
pub trait DynPaddedFft<T> {
    /// Zero pad the signal and perform a radix-2 FFT on it. See [`crate::padded_fft`].
    ///
    /// # Errors
    /// Fails on an empty signal.
    fn padded_fft(&self) -> Result<Spectrum<T>>;
}

impl<S: Sample> DynDft<S::Real> for [S] {
    fn dft(&self) -> Result<Spectrum<S::Real>> {
        crate::dft(self)
    }
}

impl<S: Sample> DynFft<S::Real> for [S] {
    fn fft(&self) -> Result<Spectrum<S::Real>> {
        crate::fft(self)
    }
}

impl<S: Sample> DynPaddedFft<S::Real> for [S] {
    fn padded_fft(&self) -> Result<Spectrum<S::Real>> {
        crate::padded_fft(self)
    }
}
