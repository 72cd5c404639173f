//! Error types for all operations in this crate.

use thiserror::Error;

/// Errors raised by channel splitting, stacking, and raw-buffer conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The raw buffer does not hold exactly `width * height * 3` bytes.
    #[error("invalid raw buffer length for a {width}x{height} rgb image (expected {expected} bytes, got {got})")]
    InvalidShape {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },
    /// Channel planes passed for stacking have differing dimensions.
    #[error("channel dimensions must match (expected {expected:?}, got {actual:?})")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Errors raised by [`ValueSampler`](crate::ValueSampler).
#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("num_samples must be at least 1 (got {num_samples})")]
    InvalidSampleCount { num_samples: usize },
    #[error("radius must be positive and finite (got {radius})")]
    InvalidRadius { radius: f32 },
    #[error("cannot sample from an empty value list")]
    EmptyValues,
    /// The rejection budget ran out before enough candidates were accepted.
    ///
    /// `attempts` counts every candidate draw, accepted or rejected.
    #[error("sampling budget of {attempts} draws exhausted after accepting {accepted} of {requested} samples")]
    Exhausted {
        requested: usize,
        accepted: usize,
        attempts: usize,
    },
}

/// Errors raised by the [`SparseFilter`](crate::SparseFilter) pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum SparseFilterError {
    #[error("sigma must be non-negative and finite (got {sigma})")]
    InvalidSigma { sigma: f32 },
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    /// A sample set held no values to draw a target from.
    #[error("sample set for channel {channel} is empty")]
    EmptySampleSet { channel: usize },
    #[error(transparent)]
    Sampling(#[from] SamplingError),
    #[error(transparent)]
    Channel(#[from] ChannelError),
}
