//! EXIF orientation resolution and quarter-turn rotation.

use std::io::Cursor;

use exif::{In, Tag};
use image::DynamicImage;

/// Corrective rotation derived from the EXIF orientation tag.
///
/// Values are the clockwise rotation to apply to the stored pixel grid so
/// that it displays upright. EXIF value 6 means the stored pixels sit 90°
/// CW from upright, so the correction is the remaining 270°; value 8 is
/// the inverse case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Orientation {
    /// Total mapping from a raw EXIF orientation value to a correction:
    /// 3 → 180°, 6 → 270°, 8 → 90°. Every other value, including the
    /// mirrored variants 2/4/5/7, maps to `Normal`.
    pub fn from_exif_value(value: u32) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate270,
            8 => Orientation::Rotate90,
            _ => Orientation::Normal,
        }
    }

    /// Clockwise correction in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotate90 => 90,
            Orientation::Rotate180 => 180,
            Orientation::Rotate270 => 270,
        }
    }
}

/// Read the EXIF orientation from raw image bytes and map it to a
/// corrective rotation.
///
/// Fail-open: absent or unreadable metadata yields `Normal`. The failure is
/// logged as a diagnostic and never surfaced to the pipeline.
pub fn resolve_orientation(data: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(data);
    match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(metadata) => {
            let raw = metadata
                .get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0));
            match raw {
                Some(value) => {
                    let orientation = Orientation::from_exif_value(value);
                    tracing::debug!(
                        exif_orientation = value,
                        correction_degrees = orientation.degrees(),
                        "Resolved EXIF orientation"
                    );
                    orientation
                }
                None => Orientation::Normal,
            }
        }
        Err(err) => {
            tracing::debug!(
                error = %err,
                "No readable EXIF metadata, assuming normal orientation"
            );
            Orientation::Normal
        }
    }
}

/// Rotate clockwise by a quarter-turn angle (90, 180 or 270 degrees).
/// 0 and unknown angles are a no-op.
pub fn rotate_by_angle(img: DynamicImage, angle: u16) -> DynamicImage {
    match angle {
        90 => img.rotate90(),
        180 => img.rotate180(),
        270 => img.rotate270(),
        _ => img,
    }
}

/// Apply a resolved orientation correction.
pub fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    rotate_by_angle(img, orientation.degrees())
}
