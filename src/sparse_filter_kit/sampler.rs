use rand::{Rng, seq::SliceRandom};

use crate::error::SamplingError;

/// Required separation between any two accepted samples is `2 * radius`.
const SEPARATION_FACTOR: f32 = 2.0;

/// An ordered set of sampled channel values with guaranteed pairwise
/// separation.
///
/// Produced by [`ValueSampler::sample`]. Values appear in acceptance order
/// and the set never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSet {
    values: Vec<u8>,
}

impl SampleSet {
    /// Accepted values in acceptance order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draws one member uniformly at random, or `None` if the set is empty.
    pub fn choose<R>(&self, rng: &mut R) -> Option<u8>
    where
        R: Rng + ?Sized,
    {
        self.values.choose(rng).copied()
    }
}

/// Rejection sampler drawing separated values from a flattened channel.
///
/// Candidates are drawn uniformly at random with replacement; a candidate is
/// accepted only if its absolute difference to every already-accepted value
/// is at least `2 * radius`. Inputs that cannot satisfy the constraint would
/// make the rejection loop spin forever, so every draw consumes one attempt
/// from a bounded budget instead and the sampler fails with
/// [`SamplingError::Exhausted`] once the budget runs out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueSampler {
    num_samples: usize,
    radius: f32,
    max_attempts: Option<usize>,
}

impl ValueSampler {
    /// Creates a sampler for `num_samples` values separated by at least
    /// `2 * radius`.
    ///
    /// # Errors
    ///
    /// * [`SamplingError::InvalidSampleCount`] - when `num_samples` is zero
    /// * [`SamplingError::InvalidRadius`] - when `radius` is not positive and
    ///   finite
    pub fn new(num_samples: usize, radius: f32) -> Result<Self, SamplingError> {
        if num_samples == 0 {
            return Err(SamplingError::InvalidSampleCount { num_samples });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SamplingError::InvalidRadius { radius });
        }

        Ok(Self {
            num_samples,
            radius,
            max_attempts: None,
        })
    }

    /// Overrides the rejection budget.
    ///
    /// The default budget is `values.len() * num_samples` candidate draws.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Draws a [`SampleSet`] from `values` using `rng`.
    ///
    /// # Errors
    ///
    /// * [`SamplingError::EmptyValues`] - when `values` is empty
    /// * [`SamplingError::Exhausted`] - when the budget runs out before
    ///   `num_samples` candidates are accepted
    pub fn sample<R>(&self, values: &[u8], rng: &mut R) -> Result<SampleSet, SamplingError>
    where
        R: Rng + ?Sized,
    {
        if values.is_empty() {
            return Err(SamplingError::EmptyValues);
        }

        let budget = self
            .max_attempts
            .unwrap_or_else(|| self.default_budget(values.len()));
        let min_separation = SEPARATION_FACTOR * self.radius;

        let mut accepted: Vec<u8> = Vec::with_capacity(self.num_samples);
        let mut attempts = 0;
        while accepted.len() < self.num_samples {
            if attempts == budget {
                return Err(SamplingError::Exhausted {
                    requested: self.num_samples,
                    accepted: accepted.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = values[rng.gen_range(0..values.len())];
            if is_valid_sample_impl(&accepted, candidate, min_separation) {
                accepted.push(candidate);
            }
        }

        Ok(SampleSet { values: accepted })
    }

    fn default_budget(&self, value_count: usize) -> usize {
        value_count
            .saturating_mul(self.num_samples)
            .max(self.num_samples)
    }
}

/// A candidate is acceptable when it keeps `min_separation` from every
/// accepted value.
fn is_valid_sample_impl(accepted: &[u8], candidate: u8, min_separation: f32) -> bool {
    accepted
        .iter()
        .all(|&value| (f32::from(candidate) - f32::from(value)).abs() >= min_separation)
}
