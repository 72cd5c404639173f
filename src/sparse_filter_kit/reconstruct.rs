/// Floor applied to the nearest-sample distance when it would be zero
/// (the target itself was sampled) or when no sample exists. Keeps the
/// Gaussian weight denominator strictly positive.
const MIN_DISTANCE_FLOOR: f32 = 1e-8;

/// Reconstructs a scalar value for `target` from sparse samples.
///
/// Each sampled value is weighted by a Gaussian of its distance to `target`,
/// with the bandwidth set self-relatively from the nearest sample:
/// `w_i = exp(-d_i^2 / (2 * d_min^2))`, so the closest sample always carries
/// weight 1 regardless of absolute scale. When the nearest distance is zero
/// (the target value itself was sampled) the bandwidth is floored at a tiny
/// positive constant, which drives every non-matching weight to zero and
/// leaves the matching samples to dominate.
///
/// Weights pair up with `filtered_values` positionally and the pairing
/// truncates at the shorter side, while the normalization sums every weight.
/// Callers that pass more filtered values than samples (such as a whole
/// flattened plane) therefore only consume the leading entries. A zero
/// normalization sum returns `0.0`.
///
/// ```
/// use sparse_filter_kit::reconstruct_from_samples;
///
/// // 100 is its own nearest sample, so it keeps weight 1 while the far
/// // sample at 255 underflows to weight 0.
/// let value = reconstruct_from_samples(100, &[100, 255], &[7.0, 1000.0]);
/// assert_eq!(value, 7.0);
/// ```
pub fn reconstruct_from_samples(target: u8, sampled: &[u8], filtered_values: &[f32]) -> f32 {
    let distances: Vec<f32> = sampled
        .iter()
        .map(|&value| (f32::from(target) - f32::from(value)).abs())
        .collect();

    let nearest = distances.iter().copied().fold(f32::INFINITY, f32::min);
    let nearest = if nearest.is_finite() && nearest > 0.0 {
        nearest
    } else {
        MIN_DISTANCE_FLOOR
    };

    let denominator = 2.0 * nearest * nearest;
    let weights: Vec<f32> = distances
        .iter()
        .map(|&distance| (-distance * distance / denominator).exp())
        .collect();

    let weighted_sum: f32 = weights
        .iter()
        .zip(filtered_values)
        .map(|(&weight, &value)| weight * value)
        .sum();
    let normalization: f32 = weights.iter().sum();

    if normalization == 0.0 {
        0.0
    } else {
        weighted_sum / normalization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn reconstruct_from_samples_with_no_samples_returns_zero() {
        assert_eq!(reconstruct_from_samples(42, &[], &[]), 0.0);
    }

    #[test]
    fn reconstruct_from_samples_with_matching_target_keeps_matching_value() {
        // Target appears in the samples, so the bandwidth floor kicks in:
        // the matching sample keeps weight 1 and the rest underflow to 0.
        let value = reconstruct_from_samples(0, &[0, 10], &[0.0, 10.0, 20.0, 30.0]);

        assert_eq!(value, 0.0);
    }

    #[test]
    fn reconstruct_from_samples_stays_within_value_bounds() {
        let value = reconstruct_from_samples(5, &[3, 9, 14], &[10.0, 20.0, 5.0]);

        assert!(value >= 5.0 && value <= 20.0);
    }

    #[test]
    fn reconstruct_from_samples_truncates_at_shorter_side() {
        // Two samples but a single filtered value: the second weight joins
        // the normalization sum without a paired value.
        let value = reconstruct_from_samples(5, &[4, 6], &[10.0]);

        assert_abs_diff_eq!(value, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn reconstruct_from_samples_ignores_filtered_values_past_sample_count() {
        let short = reconstruct_from_samples(10, &[8, 14], &[30.0, 60.0]);
        let long = reconstruct_from_samples(10, &[8, 14], &[30.0, 60.0, 999.0, -999.0]);

        assert_eq!(short, long);
    }

    #[test]
    fn reconstruct_from_samples_weights_by_relative_distance() {
        // d = [2, 4], d_min = 2: weights are e^{-1/2} and e^{-2}.
        let value = reconstruct_from_samples(10, &[8, 14], &[30.0, 60.0]);

        let near = (-0.5f32).exp();
        let far = (-2.0f32).exp();
        let expected = (near * 30.0 + far * 60.0) / (near + far);
        assert_abs_diff_eq!(value, expected, epsilon = 1e-4);
    }
}
