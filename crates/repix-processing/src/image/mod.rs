//! Image normalization module
//!
//! This module provides the normalization pipeline and its parts:
//! - Extension classification (extension)
//! - EXIF orientation resolution and quarter-turn rotation (orientation)
//! - Bounded, aspect-preserving resize (resize)
//! - Pipeline orchestration (pipeline)
//! - Placeholder synthesis (placeholder)

pub mod extension;
pub mod orientation;
pub mod pipeline;
pub mod placeholder;
pub mod resize;

pub use extension::ExtensionClass;
pub use orientation::Orientation;
pub use pipeline::{normalize, normalize_within, PipelineError};
pub use placeholder::generate_placeholder;
pub use resize::{BoundingBox, DISPLAY_BOUNDS};
