//! Bounded, aspect-preserving resize.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Maximum display envelope a normalized image must fit within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub max_width: u32,
    pub max_height: u32,
}

/// Display envelope used by the normalization pipeline.
pub const DISPLAY_BOUNDS: BoundingBox = BoundingBox {
    max_width: 1080,
    max_height: 1920,
};

impl BoundingBox {
    /// Downscale factor needed to fit `width` x `height` inside the box.
    ///
    /// Returns 1.0 when the image already fits; never returns more than
    /// 1.0 (the pipeline does not upscale).
    pub fn fit_scale(&self, width: u32, height: u32) -> f64 {
        let scale_w = self.max_width as f64 / width as f64;
        let scale_h = self.max_height as f64 / height as f64;
        scale_w.min(scale_h).min(1.0)
    }

    /// Target dimensions after fitting, each rounded to the nearest pixel
    /// with a 1 px floor.
    pub fn fit_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let scale = self.fit_scale(width, height);
        let w = ((width as f64 * scale).round() as u32).max(1);
        let h = ((height as f64 * scale).round() as u32).max(1);
        (w, h)
    }
}

/// Select a sampling filter by downscale ratio: cheaper filters for heavy
/// reductions, Lanczos for near-1:1 work.
pub fn select_filter(
    orig_width: u32,
    orig_height: u32,
    new_width: u32,
    new_height: u32,
) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

/// Shrink `img` to fit `bounds`, preserving aspect ratio. Images already
/// inside the box are returned untouched.
pub fn fit_within(img: DynamicImage, bounds: BoundingBox) -> DynamicImage {
    let (width, height) = img.dimensions();
    if bounds.fit_scale(width, height) >= 1.0 {
        return img;
    }

    let (target_width, target_height) = bounds.fit_dimensions(width, height);
    let filter = select_filter(width, height, target_width, target_height);
    img.resize_exact(target_width, target_height, filter)
}
