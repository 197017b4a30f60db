//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use asn_api::error::AppError;
use asn_api::router::panic_response;
use asn_core::{CoreError, StructuralError};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: StructuralError maps to 422 with STRUCTURAL_ERROR code and fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn structural_error_returns_422_with_fields() {
    let err = AppError::from(StructuralError::new(
        "cartons[0].ucc128_label.sscc",
        "SSCC must be exactly 18 digits",
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "STRUCTURAL_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("cartons[0].ucc128_label.sscc"));
    assert_eq!(json["fields"][0]["field"], "cartons[0].ucc128_label.sscc");
    assert_eq!(json["fields"][0]["message"], "SSCC must be exactly 18 digits");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid JSON body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid JSON body");
}

// ---------------------------------------------------------------------------
// Test: Core config errors are sanitized 500s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_config_error_is_sanitized() {
    let err = AppError::Core(CoreError::Config("bad profile".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError hides its message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_without_details() {
    let err = AppError::InternalError("stack trace here".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("stack trace"));
}

// ---------------------------------------------------------------------------
// Test: A panicking handler becomes a sanitized JSON 500
// ---------------------------------------------------------------------------

async fn explode() -> &'static str {
    panic!("rule table corrupted")
}

#[tokio::test]
async fn panicking_handler_returns_json_500() {
    let app = Router::new()
        .route("/boom", get(explode))
        .layer(CatchPanicLayer::custom(panic_response));

    let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
