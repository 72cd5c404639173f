//! # sparse-filter-kit
//!
//! A Rust library for sparse, sample-based filtering of RGB images.
//!
//! This crate provides the building blocks of the pipeline as standalone
//! operations:
//!
//! - **Channel Splitting**: Decomposes RGB images into per-channel planes and
//!   stacks filtered planes back together
//! - **Value Sampling**: Draws channel values with a guaranteed minimum
//!   pairwise separation under a bounded retry budget
//! - **Gaussian Blur**: Separable Gaussian smoothing of single-channel planes
//! - **Sparse Reconstruction**: Rebuilds a scalar value for a target from
//!   sparse samples with distance-based Gaussian weights
//! - **Sparse Filtering Pipeline**: Runs the whole process per channel and
//!   reports one reconstructed value per channel
//!
//! ## Example Usage
//!
//! ```no_run
//! use sparse_filter_kit::{SparseFilterExt, clamp_to_rgb8};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let image = image::open("input.png")?.to_rgb8();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Sample 20 values per channel at radius 4, blur with sigma 0.9
//! let (filtered, interpolated) = image.sparse_filter(20, 4.0, 0.9, &mut rng)?;
//!
//! // Clamp the f32 result back to 8-bit for saving
//! clamp_to_rgb8(&filtered).save("output.png")?;
//! println!("reconstructed (r, g, b): {interpolated:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: Enables serialization support (optional)

mod error;
mod sparse_filter_kit;
mod utils;

#[cfg(test)]
mod test_utils;

pub use error::{ChannelError, SamplingError, SparseFilterError};
pub use sparse_filter_kit::blur::{BlurChannelExt, gaussian_blur_channel};
pub use sparse_filter_kit::channels::{
    SplitChannelsExt, clamp_to_rgb8, rgb_image_from_raw, split_rgb_channels, stack_channels,
};
pub use sparse_filter_kit::pipeline::{SparseFilter, SparseFilterExt};
pub use sparse_filter_kit::reconstruct::reconstruct_from_samples;
pub use sparse_filter_kit::sampler::{SampleSet, ValueSampler};

// Re-export imageproc::definitions::Image for convenience
pub use imageproc::definitions::Image;
