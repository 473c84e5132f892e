//! Solid-color placeholder synthesis.

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use crate::image::pipeline::{encode, PipelineError};

/// Generate a solid white JPEG of exactly `width` x `height`.
///
/// Dimensions must be positive; upper bounds are the caller's
/// responsibility. This path bypasses the normalization pipeline entirely:
/// no orientation, no resize, always JPEG.
pub fn generate_placeholder(width: u32, height: u32) -> Result<Bytes, PipelineError> {
    let canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    encode(&DynamicImage::ImageRgb8(canvas), ImageFormat::Jpeg)
}
