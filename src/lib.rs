#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
// We do many casts from usize to floats. This is what triggers this lint. Casting here is fine
// because the usize represents an index into a sample sequence. In practice these sequences will
// NEVER be even close to having 24 bits represent the number of indices.
#![allow(clippy::cast_precision_loss)]

use rustfft::FftPlanner;
use std::cell::RefCell;
use std::sync::Arc;

pub use rustfft::num_complex;
pub use rustfft::num_complex::Complex;
pub use rustfft::FftNum;

pub mod const_size;
pub mod dyn_size;
pub mod reference;

mod dft;
mod error;
mod padding;
mod radix2;
mod sample;
mod spectrum;

pub use crate::dft::dft;
pub use crate::error::Result;
pub use crate::error::TransformError;
pub use crate::padding::pad_and_transform;
pub use crate::padding::pad_to_power_of_two;
pub use crate::padding::padded_fft;
pub use crate::radix2::fft;
pub use crate::radix2::fft_cooley_tukey;
pub use crate::radix2::PARALLEL_THRESHOLD;
pub use crate::sample::Real;
pub use crate::sample::Sample;
pub use crate::spectrum::Spectrum;

/// This module re-exports all the traits and functions under a single namespace to be easily
/// consumed.
pub mod prelude {
    pub use crate::const_size::*;
    pub use crate::dyn_size::*;
    pub use crate::reference::*;
    pub use crate::*;
}

pub(crate) struct PrivateWrapper<T>(T);

// TODO: Swap the RefCell for an UnsafeCell to skip the runtime borrow check on every call.
fn get_fft_algorithm<T: FftNum>(size: usize) -> Arc<dyn rustfft::Fft<T>> {
    generic_singleton::get_or_init!(|| RefCell::new(PrivateWrapper(FftPlanner::new())))
        .borrow_mut()
        .0
        .plan_fft_forward(size)
}
