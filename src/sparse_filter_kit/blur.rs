use image::Luma;
use imageproc::{definitions::Image, map::map_colors};

/// Trait providing Gaussian smoothing for single-channel planes.
pub trait BlurChannelExt {
    /// Blurs the plane with a separable Gaussian kernel of standard
    /// deviation `sigma`; see [`gaussian_blur_channel`].
    fn blur_channel(&self, sigma: f32) -> Image<Luma<f32>>;
}

impl BlurChannelExt for Image<Luma<u8>> {
    fn blur_channel(&self, sigma: f32) -> Image<Luma<f32>> {
        gaussian_blur_channel(self, sigma)
    }
}

/// Applies a separable Gaussian blur to one channel plane.
///
/// The kernel is truncated at `ceil(3 * sigma)` taps per side and normalized
/// to unit sum. Coordinates past the border clamp to the nearest edge pixel
/// (replicated border); this mode is fixed for reproducibility. Any
/// `sigma <= 0` returns the unfiltered plane, converted losslessly to `f32`,
/// so `sigma == 0` is an exact identity.
pub fn gaussian_blur_channel(channel: &Image<Luma<u8>>, sigma: f32) -> Image<Luma<f32>> {
    let channel = map_colors(channel, |Luma([value])| Luma([f32::from(value)]));
    if sigma <= 0.0 {
        return channel;
    }

    let kernel = gaussian_kernel_impl(sigma);
    let blurred = horizontal_pass_impl(&channel, &kernel);
    vertical_pass_impl(&blurred, &kernel)
}

/// Symmetric 1-D Gaussian taps for `sigma > 0`, normalized to unit sum.
fn gaussian_kernel_impl(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil() as i64;
    let denominator = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|offset| {
            let x = offset as f32;
            (-x * x / denominator).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

fn horizontal_pass_impl(image: &Image<Luma<f32>>, kernel: &[f32]) -> Image<Luma<f32>> {
    let (width, height) = image.dimensions();
    let half = (kernel.len() / 2) as i64;

    // from_fn with index clamping handles the replicated border
    Image::from_fn(width, height, |x, y| {
        let mut sum = 0.0;
        for (tap, &weight) in kernel.iter().enumerate() {
            let sample_x =
                (i64::from(x) + tap as i64 - half).clamp(0, i64::from(width) - 1) as u32;
            sum += image.get_pixel(sample_x, y)[0] * weight;
        }
        Luma([sum])
    })
}

fn vertical_pass_impl(image: &Image<Luma<f32>>, kernel: &[f32]) -> Image<Luma<f32>> {
    let (width, height) = image.dimensions();
    let half = (kernel.len() / 2) as i64;

    Image::from_fn(width, height, |x, y| {
        let mut sum = 0.0;
        for (tap, &weight) in kernel.iter().enumerate() {
            let sample_y =
                (i64::from(y) + tap as i64 - half).clamp(0, i64::from(height) - 1) as u32;
            sum += image.get_pixel(x, sample_y)[0] * weight;
        }
        Luma([sum])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn gradient_channel(width: u32, height: u32) -> Image<Luma<u8>> {
        Image::from_fn(width, height, |x, y| Luma([(x * 10 + y * 3) as u8]))
    }

    #[test]
    fn gaussian_blur_channel_with_zero_sigma_returns_identity() {
        let channel = gradient_channel(4, 3);

        let blurred = gaussian_blur_channel(&channel, 0.0);

        for (x, y, pixel) in channel.enumerate_pixels() {
            assert_eq!(blurred.get_pixel(x, y)[0], f32::from(pixel[0]));
        }
    }

    #[test]
    fn gaussian_blur_channel_with_negative_sigma_returns_identity() {
        let channel = gradient_channel(3, 3);

        let blurred = gaussian_blur_channel(&channel, -1.5);

        assert_eq!(
            blurred.get_pixel(2, 2)[0],
            f32::from(channel.get_pixel(2, 2)[0])
        );
    }

    #[test]
    fn gaussian_blur_channel_preserves_dimensions() {
        let channel = gradient_channel(7, 5);

        let blurred = gaussian_blur_channel(&channel, 1.5);

        assert_eq!(blurred.dimensions(), (7, 5));
    }

    #[test]
    fn gaussian_blur_channel_keeps_uniform_image_uniform() {
        let channel: Image<Luma<u8>> = Image::from_pixel(6, 6, Luma([100]));

        let blurred = gaussian_blur_channel(&channel, 2.0);

        for (_, _, pixel) in blurred.enumerate_pixels() {
            assert_abs_diff_eq!(pixel[0], 100.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn gaussian_blur_channel_smooths_step_edge() {
        let channel: Image<Luma<u8>> =
            Image::from_fn(8, 1, |x, _| Luma([if x < 4 { 0 } else { 255 }]));

        let blurred = gaussian_blur_channel(&channel, 1.0);

        let at_edge = blurred.get_pixel(4, 0)[0];
        assert!(at_edge > 0.0 && at_edge < 255.0);
        for (_, _, pixel) in blurred.enumerate_pixels() {
            assert!(pixel[0] >= -0.001 && pixel[0] <= 255.001);
        }
    }

    #[test]
    fn gaussian_kernel_impl_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel_impl(0.9);

        assert_eq!(kernel.len() % 2, 1);
        let sum: f32 = kernel.iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-5);
        for (first, second) in kernel.iter().zip(kernel.iter().rev()) {
            assert_abs_diff_eq!(*first, *second, epsilon = 1e-6);
        }
        let middle = kernel.len() / 2;
        assert!(kernel.iter().all(|&weight| weight <= kernel[middle]));
    }
}
