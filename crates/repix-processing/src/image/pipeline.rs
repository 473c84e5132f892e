//! The normalization pipeline: classify, decode, orient, rotate, fit,
//! encode.

use std::io::Cursor;

use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::image::extension::ExtensionClass;
use crate::image::orientation::{self, Orientation};
use crate::image::resize::{fit_within, BoundingBox, DISPLAY_BOUNDS};

/// Fatal pipeline failures. Orientation metadata problems are absorbed in
/// the resolver and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("unsupported rotation of {0} degrees (must be a multiple of 90)")]
    UnsupportedRotation(i32),
}

/// Normalize an uploaded file for storage and display.
///
/// Supported raster types (`png`, `jpg`, `jpeg` by extension) are decoded,
/// EXIF-corrected, rotated by the optional caller angle, shrunk into the
/// 1080x1920 display envelope and re-encoded in their original container.
/// Everything else passes through byte-for-byte, rotation argument
/// included.
pub fn normalize(
    data: &[u8],
    file_name: &str,
    rotation: Option<i32>,
) -> Result<Bytes, PipelineError> {
    normalize_within(data, file_name, rotation, DISPLAY_BOUNDS)
}

/// [`normalize`] against an explicit bounding box.
pub fn normalize_within(
    data: &[u8],
    file_name: &str,
    rotation: Option<i32>,
    bounds: BoundingBox,
) -> Result<Bytes, PipelineError> {
    let class = ExtensionClass::classify(file_name);
    let Some(format) = class.image_format() else {
        tracing::debug!(file_name, "Unsupported extension, passing bytes through unchanged");
        return Ok(Bytes::copy_from_slice(data));
    };

    // Reject a bad rotation request before any pixel work.
    let explicit_angle = rotation.map(quarter_turn).transpose()?;

    let mut img = decode(data)?;
    let (source_width, source_height) = img.dimensions();

    let correction = orientation::resolve_orientation(data);
    if correction != Orientation::Normal {
        img = orientation::apply_orientation(img, correction);
    }

    if let Some(angle) = explicit_angle {
        img = orientation::rotate_by_angle(img, angle);
    }

    img = fit_within(img, bounds);

    let (width, height) = img.dimensions();
    tracing::debug!(
        file_name,
        source_width,
        source_height,
        correction_degrees = correction.degrees(),
        explicit_degrees = ?explicit_angle,
        width,
        height,
        "Normalized image"
    );

    encode(&img, format)
}

/// Normalize a signed caller angle into a clockwise quarter turn.
fn quarter_turn(degrees: i32) -> Result<u16, PipelineError> {
    match degrees.rem_euclid(360) {
        angle @ (0 | 90 | 180 | 270) => Ok(angle as u16),
        _ => Err(PipelineError::UnsupportedRotation(degrees)),
    }
}

fn decode(data: &[u8]) -> Result<DynamicImage, PipelineError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| PipelineError::Decode(image::ImageError::IoError(e)))?
        .decode()
        .map_err(PipelineError::Decode)
}

pub(crate) fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Bytes, PipelineError> {
    let (width, height) = img.dimensions();
    let mut buffer = Vec::with_capacity(width as usize * height as usize * 3);
    let mut cursor = Cursor::new(&mut buffer);

    match format {
        // JPEG has no alpha channel; flatten before encoding.
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut cursor, format),
        _ => img.write_to(&mut cursor, format),
    }
    .map_err(PipelineError::Encode)?;

    Ok(Bytes::from(buffer))
}
