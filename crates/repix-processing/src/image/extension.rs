//! File-name extension classification.

use std::path::Path;

/// Container class implied by a file name's extension.
///
/// `jpg` and `jpeg` are one class. Anything else is `Other`: never decoded,
/// only byte-copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    Png,
    Jpeg,
    Other,
}

impl ExtensionClass {
    /// Classify a file name by its extension, case-insensitively.
    pub fn classify(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => ExtensionClass::Png,
            Some("jpg") | Some("jpeg") => ExtensionClass::Jpeg,
            _ => ExtensionClass::Other,
        }
    }

    /// Encode target for supported raster classes.
    pub fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            ExtensionClass::Png => Some(image::ImageFormat::Png),
            ExtensionClass::Jpeg => Some(image::ImageFormat::Jpeg),
            ExtensionClass::Other => None,
        }
    }

    /// MIME type for supported raster classes.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            ExtensionClass::Png => Some("image/png"),
            ExtensionClass::Jpeg => Some("image/jpeg"),
            ExtensionClass::Other => None,
        }
    }
}
