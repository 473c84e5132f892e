//! Repix Media Processing Library
//!
//! This crate provides the image normalization pipeline: extension
//! classification, EXIF orientation correction, caller-requested rotation,
//! bounded resize and re-encoding, plus placeholder synthesis. Everything
//! here is synchronous, CPU-bound and free of I/O; callers hand in byte
//! buffers and get byte buffers back.

pub mod image;
pub mod validator;

// Re-export commonly used types
pub use image::{
    generate_placeholder, normalize, normalize_within, BoundingBox, ExtensionClass, Orientation,
    PipelineError, DISPLAY_BOUNDS,
};
pub use validator::{UploadValidator, ValidationError};
