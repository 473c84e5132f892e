//! OpenAPI document assembly.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::{normalize, placeholder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repix API",
        description = "Image upload normalization service: EXIF orientation correction, rotation, bounded resize and placeholder generation"
    ),
    paths(normalize::normalize_image, placeholder::placeholder_image),
    components(schemas(ErrorResponse, normalize::NormalizeForm)),
    tags(
        (name = "images", description = "Image normalization and placeholder endpoints")
    )
)]
pub struct ApiDoc;
