#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the resample module.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// resampling of sample grids to a new resolution.
pub mod resample;

/// floating point sample types.
pub mod scalar;

pub use crate::error::ResampleError;
pub use crate::resample::{
    resample, resample_frame, resample_into, resample_with, ResampleOptions,
};
pub use crate::scalar::Scalar;
