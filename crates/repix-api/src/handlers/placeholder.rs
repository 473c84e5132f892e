//! Generate a solid white placeholder image.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
};
use repix_core::AppError;
use serde::Deserialize;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Default placeholder size: the display envelope.
const DEFAULT_WIDTH: u32 = 1080;
const DEFAULT_HEIGHT: u32 = 1920;
/// Per-side cap. The generator itself does not enforce one, so the HTTP
/// boundary has to.
const MAX_DIMENSION: u32 = 8192;

#[derive(Debug, Deserialize)]
pub struct PlaceholderQuery {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Placeholder image handler
///
/// Returns a solid white JPEG of the requested dimensions, 1080x1920 when
/// unspecified. Always JPEG, regardless of any requested format.
#[utoipa::path(
    get,
    path = "/api/v0/images/placeholder",
    tag = "images",
    params(
        ("width" = Option<u32>, Query, description = "Placeholder width in pixels (default 1080)"),
        ("height" = Option<u32>, Query, description = "Placeholder height in pixels (default 1920)")
    ),
    responses(
        (status = 200, description = "Placeholder image", content_type = "image/jpeg"),
        (status = 400, description = "Invalid dimensions", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(_state), fields(operation = "placeholder_image"))]
pub async fn placeholder_image(
    State(_state): State<Arc<AppState>>,
    Query(query): Query<PlaceholderQuery>,
) -> Result<Response, HttpAppError> {
    let PlaceholderQuery { width, height } = query;

    if width == 0 || height == 0 {
        return Err(
            AppError::InvalidInput("Placeholder dimensions must be at least 1x1".to_string())
                .into(),
        );
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(AppError::InvalidInput(format!(
            "Placeholder dimensions must not exceed {}px per side",
            MAX_DIMENSION
        ))
        .into());
    }

    tracing::debug!(width, height, "Generating placeholder");

    let data =
        tokio::task::spawn_blocking(move || repix_processing::generate_placeholder(width, height))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Placeholder task failed to complete");
                AppError::Internal(e.to_string())
            })?
            .map_err(HttpAppError::from)?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"placeholder.jpg\"",
        )
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}
