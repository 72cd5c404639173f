//! Shared helpers for unit tests.

use image::Rgb;
use imageproc::definitions::Image;
use rand::{SeedableRng, rngs::StdRng};

/// Creates an 8x8 RGB gradient image whose channel values are well separated,
/// so sampling with a small radius always has room to succeed.
pub fn create_test_rgb_image() -> Image<Rgb<u8>> {
    Image::from_fn(8, 8, |x, y| {
        Rgb([(x * 30) as u8, (y * 30) as u8, ((x + y) * 15) as u8])
    })
}

/// Creates an RGB image with every channel of every pixel set to `value`.
pub fn create_constant_rgb_image(width: u32, height: u32, value: u8) -> Image<Rgb<u8>> {
    Image::from_pixel(width, height, Rgb([value, value, value]))
}

/// Creates a deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
