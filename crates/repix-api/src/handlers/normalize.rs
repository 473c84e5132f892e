//! Normalize an uploaded file.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::Response,
};
use bytes::Bytes;
use repix_core::AppError;
use repix_processing::{ExtensionClass, UploadValidator};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const ROTATION_FIELD: &str = "rotation";

/// Multipart form accepted by the normalize endpoint.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)] // Schema-only type for the OpenAPI document
pub struct NormalizeForm {
    /// File to normalize. Raster uploads (png/jpg/jpeg) are transformed;
    /// everything else passes through unchanged.
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// Optional clockwise rotation in degrees, a multiple of 90.
    rotation: Option<i32>,
}

struct UploadedFile {
    file_name: String,
    content_type: Option<String>,
    data: Bytes,
}

/// Normalize image handler
///
/// Accepts a multipart upload, corrects EXIF orientation, applies the
/// optional rotation, fits the image into the display envelope and returns
/// the re-encoded bytes. Unsupported file types come back byte-for-byte.
#[utoipa::path(
    post,
    path = "/api/v0/images/normalize",
    tag = "images",
    request_body(content = NormalizeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Normalized file", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid input or undecodable image", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "normalize_image"))]
pub async fn normalize_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let validator = UploadValidator::new(state.config.max_upload_bytes);
    let (file, rotation) = read_upload(multipart, &validator).await?;

    tracing::debug!(
        file_name = %file.file_name,
        size = file.data.len(),
        rotation = ?rotation,
        "Normalizing upload"
    );

    let class = ExtensionClass::classify(&file.file_name);

    let data = file.data.clone();
    let file_name = file.file_name.clone();
    let normalized = tokio::task::spawn_blocking(move || {
        repix_processing::normalize(&data, &file_name, rotation)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Normalization task failed to complete");
        AppError::Internal(e.to_string())
    })?
    .map_err(HttpAppError::from)?;

    let content_type = class
        .content_type()
        .map(str::to_owned)
        .or(file.content_type)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"normalized_{}\"", file.file_name),
        )
        .header(header::CONTENT_LENGTH, normalized.len())
        .body(Body::from(normalized))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}

/// Drain the multipart body into the file part and the optional rotation.
async fn read_upload(
    mut multipart: Multipart,
    validator: &UploadValidator,
) -> Result<(UploadedFile, Option<i32>), HttpAppError> {
    let mut file: Option<UploadedFile> = None;
    let mut rotation: Option<i32> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let raw_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file part: {}", e)))?;

                let file_name =
                    sanitize_file_name(validator.validate_file_name(raw_name.as_deref())?);
                validator.validate_file_size(data.len())?;

                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            Some(ROTATION_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read rotation part: {}", e))
                })?;
                let degrees = text.trim().parse::<i32>().map_err(|_| {
                    AppError::InvalidInput(format!(
                        "Invalid rotation '{}': expected a whole number of degrees",
                        text
                    ))
                })?;
                rotation = Some(degrees);
            }
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing 'file' part".to_string()))?;
    Ok((file, rotation))
}

/// Reduce a client-supplied name to its final path component and strip
/// characters that would break the Content-Disposition header.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");
    base.replace(['"', '\r', '\n'], "")
}
