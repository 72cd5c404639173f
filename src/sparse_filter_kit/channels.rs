use image::{Luma, Rgb};
use imageproc::{
    definitions::{Clamp, Image},
    map::map_colors,
};

use crate::{error::ChannelError, utils::ensure_matching_dimensions};

/// Trait providing channel-plane decomposition for RGB images.
///
/// Splitting borrows the image; the planes are freshly allocated copies, so
/// the source stays usable afterward.
pub trait SplitChannelsExt {
    /// Splits the image into its red, green, and blue planes.
    ///
    /// Each plane's backing buffer (`as_raw()`) is the row-major flattening
    /// of that channel, which is the value list later sampling draws from.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sparse_filter_kit::{Image, SplitChannelsExt};
    /// use image::Rgb;
    ///
    /// let image: Image<Rgb<u8>> = Image::new(10, 10);
    /// let [red, green, blue] = image.split_channels();
    /// ```
    fn split_channels(&self) -> [Image<Luma<u8>>; 3];
}

impl SplitChannelsExt for Image<Rgb<u8>> {
    fn split_channels(&self) -> [Image<Luma<u8>>; 3] {
        split_rgb_channels(self)
    }
}

/// Splits an RGB image into three single-channel planes in R, G, B order.
pub fn split_rgb_channels(image: &Image<Rgb<u8>>) -> [Image<Luma<u8>>; 3] {
    let (width, height) = image.dimensions();
    core::array::from_fn(|channel| {
        Image::from_fn(width, height, |x, y| {
            let Rgb(pixel) = *image.get_pixel(x, y);
            Luma([pixel[channel]])
        })
    })
}

/// Builds an RGB image from a raw row-major `width * height * 3` byte buffer.
///
/// This is the entry point for callers holding untyped pixel data; the typed
/// API makes any other channel layout unrepresentable.
///
/// # Errors
///
/// Returns [`ChannelError::InvalidShape`] when the buffer length does not
/// match the dimensions.
pub fn rgb_image_from_raw(
    width: u32,
    height: u32,
    data: Vec<u8>,
) -> Result<Image<Rgb<u8>>, ChannelError> {
    let expected = width as usize * height as usize * 3;
    let got = data.len();
    if got != expected {
        return Err(ChannelError::InvalidShape {
            width,
            height,
            expected,
            got,
        });
    }

    Image::from_raw(width, height, data).ok_or(ChannelError::InvalidShape {
        width,
        height,
        expected,
        got,
    })
}

/// Stacks three filtered channel planes back into an RGB image.
///
/// # Errors
///
/// Returns [`ChannelError::DimensionMismatch`] when the planes disagree on
/// dimensions.
pub fn stack_channels(channels: &[Image<Luma<f32>>; 3]) -> Result<Image<Rgb<f32>>, ChannelError> {
    let [red, green, blue] = channels;
    let (width, height) = red.dimensions();

    for plane in [green, blue] {
        ensure_matching_dimensions((width, height), plane.dimensions())?;
    }

    Ok(Image::from_fn(width, height, |x, y| {
        Rgb([
            red.get_pixel(x, y)[0],
            green.get_pixel(x, y)[0],
            blue.get_pixel(x, y)[0],
        ])
    }))
}

/// Clamps a filtered image into 8-bit RGB for display or encoding.
///
/// Values below 0 and above 255 saturate; in-range values truncate toward
/// zero.
pub fn clamp_to_rgb8(image: &Image<Rgb<f32>>) -> Image<Rgb<u8>> {
    map_colors(image, |Rgb(pixel)| Rgb(pixel.map(<u8 as Clamp<f32>>::clamp)))
}
