use std::time::Instant;

use image::{Luma, Rgb};
use imageproc::definitions::Image;
use itertools::izip;
use log::debug;
use rand::Rng;

use crate::{
    error::SparseFilterError,
    sparse_filter_kit::{
        blur::gaussian_blur_channel,
        channels::{split_rgb_channels, stack_channels},
        reconstruct::reconstruct_from_samples,
        sampler::{SampleSet, ValueSampler},
    },
    utils::ensure_non_empty,
};

/// Sparse filtering pipeline over RGB images.
///
/// Runs the full process per channel: sample representative values with a
/// minimum separation, blur the channel plane, pick a random target value
/// from the samples and reconstruct a scalar for it from the blurred plane.
/// The result is the stacked blurred image plus one reconstructed value per
/// channel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseFilter {
    sampler: ValueSampler,
    sigma: f32,
}

impl SparseFilter {
    /// Creates a pipeline configuration.
    ///
    /// # Arguments
    ///
    /// * `num_samples` - Number of values to sample per channel (must be >= 1)
    /// * `radius` - Sampling radius; accepted samples stay at least
    ///   `2 * radius` apart (must be positive and finite)
    /// * `sigma` - Gaussian blur standard deviation (must be finite and
    ///   non-negative; `0` disables blurring)
    ///
    /// # Errors
    ///
    /// * `SparseFilterError::Sampling` - When `num_samples` or `radius` is
    ///   out of range
    /// * `SparseFilterError::InvalidSigma` - When `sigma` is negative or not
    ///   finite
    pub fn new(num_samples: usize, radius: f32, sigma: f32) -> Result<Self, SparseFilterError> {
        let sampler = ValueSampler::new(num_samples, radius)?;
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(SparseFilterError::InvalidSigma { sigma });
        }

        Ok(Self { sampler, sigma })
    }

    /// Overrides the sampling retry budget; see
    /// [`ValueSampler::with_max_attempts`].
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.sampler = self.sampler.with_max_attempts(max_attempts);
        self
    }

    /// Runs the pipeline on `image` using `rng` as the randomness source.
    ///
    /// The RNG is consumed in a fixed order (sampling for red, green and
    /// blue, then one target choice per channel in the same order), so equal
    /// seeds reproduce equal outputs.
    ///
    /// # Arguments
    ///
    /// * `image` - Input RGB image
    /// * `rng` - Randomness source for sampling and target selection
    ///
    /// # Returns
    ///
    /// The blurred image with `f32` components plus the reconstructed value
    /// for each channel, in `[red, green, blue]` order.
    ///
    /// # Errors
    ///
    /// * `SparseFilterError::EmptyImage` - When either image dimension is zero
    /// * `SparseFilterError::Sampling` - When the retry budget runs out before
    ///   enough separated samples are accepted
    pub fn process<R>(
        &self,
        image: &Image<Rgb<u8>>,
        rng: &mut R,
    ) -> Result<(Image<Rgb<f32>>, [f32; 3]), SparseFilterError>
    where
        R: Rng + ?Sized,
    {
        let (width, height) = image.dimensions();
        ensure_non_empty(width, height)?;

        let total = Instant::now();
        let channels = split_rgb_channels(image);

        let stage = Instant::now();
        let mut sample_sets: Vec<SampleSet> = Vec::with_capacity(channels.len());
        for channel in &channels {
            sample_sets.push(self.sampler.sample(channel.as_raw(), rng)?);
        }
        debug!("value sampling took {:?}", stage.elapsed());

        let stage = Instant::now();
        let filtered: [Image<Luma<f32>>; 3] =
            core::array::from_fn(|channel| gaussian_blur_channel(&channels[channel], self.sigma));
        debug!("gaussian filtering took {:?}", stage.elapsed());

        let stage = Instant::now();
        let mut targets = [0u8; 3];
        for (channel, (target, samples)) in targets.iter_mut().zip(&sample_sets).enumerate() {
            *target = samples
                .choose(rng)
                .ok_or(SparseFilterError::EmptySampleSet { channel })?;
        }

        let mut interpolated = [0.0f32; 3];
        for (result, samples, &target, plane) in
            izip!(&mut interpolated, &sample_sets, &targets, &filtered)
        {
            *result = reconstruct_from_samples(target, samples.values(), plane.as_raw());
        }
        debug!("interpolation took {:?}", stage.elapsed());

        let stacked = stack_channels(&filtered)?;
        debug!("sparse filtering took {:?} in total", total.elapsed());

        Ok((stacked, interpolated))
    }
}

/// Trait providing the sparse filtering pipeline on RGB images.
pub trait SparseFilterExt {
    /// Samples, blurs and reconstructs in one call; see
    /// [`SparseFilter::process`].
    ///
    /// # Arguments
    ///
    /// * `num_samples` - Number of values to sample per channel
    /// * `radius` - Sampling radius (minimum separation is `2 * radius`)
    /// * `sigma` - Gaussian blur standard deviation
    /// * `rng` - Randomness source for sampling and target selection
    ///
    /// # Returns
    ///
    /// The blurred image plus one reconstructed value per channel.
    ///
    /// # Errors
    ///
    /// * `SparseFilterError::Sampling` - When parameters are out of range or
    ///   the retry budget runs out
    /// * `SparseFilterError::InvalidSigma` - When `sigma` is negative or not
    ///   finite
    /// * `SparseFilterError::EmptyImage` - When either image dimension is zero
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sparse_filter_kit::{Image, SparseFilterExt};
    /// use image::Rgb;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgb<u8>> = Image::from_fn(64, 64, |x, y| {
    ///     Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
    /// });
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let (filtered, interpolated) = image.sparse_filter(20, 4.0, 0.9, &mut rng)?;
    /// assert_eq!(filtered.dimensions(), (64, 64));
    /// println!("reconstructed (r, g, b): {interpolated:?}");
    /// # Ok(())
    /// # }
    /// ```
    fn sparse_filter<R>(
        &self,
        num_samples: usize,
        radius: f32,
        sigma: f32,
        rng: &mut R,
    ) -> Result<(Image<Rgb<f32>>, [f32; 3]), SparseFilterError>
    where
        R: Rng + ?Sized;
}

impl SparseFilterExt for Image<Rgb<u8>> {
    fn sparse_filter<R>(
        &self,
        num_samples: usize,
        radius: f32,
        sigma: f32,
        rng: &mut R,
    ) -> Result<(Image<Rgb<f32>>, [f32; 3]), SparseFilterError>
    where
        R: Rng + ?Sized,
    {
        SparseFilter::new(num_samples, radius, sigma)?.process(self, rng)
    }
}
