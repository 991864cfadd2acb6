//! Numeric types the transforms accept.
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::num_traits::FloatConst;
use rustfft::FftNum;

/// Floating point type a spectrum is computed in.
///
/// Implemented for `f32` and `f64`.
pub trait Real: FftNum + Float + FloatConst {
    /// Converts a sample index or sequence length into this type.
    fn from_index(index: usize) -> Self;
}

/// A single time-domain sample, either real or complex.
///
/// Real samples are lifted to complex ones with a zero imaginary part.
pub trait Sample: Copy {
    /// The float type of the spectrum produced from samples of this type.
    type Real: Real;

    /// Lifts the sample onto the complex plane.
    fn to_complex(self) -> Complex<Self::Real>;
}

macro_rules! impl_real {
    ($($float:ty),*) => {
        $(
            impl Real for $float {
                fn from_index(index: usize) -> Self {
                    index as $float
                }
            }

            impl Sample for $float {
                type Real = $float;

                fn to_complex(self) -> Complex<$float> {
                    Complex::new(self, 0.0)
                }
            }
        )*
    };
}

impl_real!(f32, f64);

impl<T: Real> Sample for Complex<T> {
    type Real = T;

    fn to_complex(self) -> Complex<T> {
        self
    }
}

/// Lifts every sample onto the complex plane, allocating a new buffer.
pub(crate) fn to_complex_buffer<S: Sample>(samples: &[S]) -> Vec<Complex<S::Real>> {
    samples.iter().map(|sample| sample.to_complex()).collect()
}

/// `exp(-2πi · numerator / denominator)`, the forward transform kernel.
pub(crate) fn twiddle<T: Real>(numerator: usize, denominator: usize) -> Complex<T> {
    let turn = T::PI() + T::PI();
    let angle = -turn * T::from_index(numerator) / T::from_index(denominator);
    Complex::from_polar(T::one(), angle)
}
