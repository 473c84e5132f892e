//! Placeholder endpoint and health probe integration tests.
//!
//! Run with: `cargo test -p repix-api --test placeholders_test`

mod helpers;

use axum::http::StatusCode;
use helpers::fixtures;
use helpers::setup_test_server;
use image::GenericImageView;

#[tokio::test]
async fn test_placeholder_custom_dimensions() {
    let server = setup_test_server();

    let response = server
        .get("/api/v0/images/placeholder")
        .add_query_param("width", 300)
        .add_query_param("height", 200)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/jpeg")
    );
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"placeholder.jpg\"")
    );

    let decoded = fixtures::decode_image(response.as_bytes());
    assert_eq!(decoded.dimensions(), (300, 200));

    // Solid white, modulo JPEG rounding.
    for pixel in decoded.to_rgb8().pixels() {
        for channel in pixel.0 {
            assert!(channel >= 250, "expected white, got {:?}", pixel);
        }
    }
}

#[tokio::test]
async fn test_placeholder_defaults_to_display_envelope() {
    let server = setup_test_server();

    let response = server.get("/api/v0/images/placeholder").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let decoded = fixtures::decode_image(response.as_bytes());
    assert_eq!(decoded.dimensions(), (1080, 1920));
}

#[tokio::test]
async fn test_placeholder_rejects_zero_dimension() {
    let server = setup_test_server();

    let response = server
        .get("/api/v0/images/placeholder")
        .add_query_param("width", 0)
        .add_query_param("height", 200)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_placeholder_rejects_oversized_dimension() {
    let server = setup_test_server();

    let response = server
        .get("/api/v0/images/placeholder")
        .add_query_param("width", 100_000)
        .add_query_param("height", 200)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_check() {
    let server = setup_test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = setup_test_server();

    let response = server.get("/health").await;
    assert!(response.headers().get("x-request-id").is_some());

    // An incoming ID is propagated rather than replaced.
    let response = server
        .get("/health")
        .add_header("X-Request-ID", "trace-me-123")
        .await;
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me-123")
    );
}
