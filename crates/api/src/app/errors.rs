use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use products_catalog::{FieldViolation, ValidationErrors};

/// The 400 envelope for any validation failure:
/// `{timestamp, status, error, path}` where `error` is a JSON-encoded
/// *string* holding the serialized `[{loc, msg, type}, ...]` array.
pub fn validation_error_response(path: &str, errors: &ValidationErrors) -> axum::response::Response {
    let encoded = serde_json::to_string(errors.violations()).unwrap_or_else(|_| "[]".to_string());
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": 400,
            "error": encoded,
            "path": path,
        })),
    )
        .into_response()
}

/// Shorthand for a single-violation 400 (path/query parameter failures).
pub fn single_violation_response(path: &str, violation: FieldViolation) -> axum::response::Response {
    validation_error_response(path, &ValidationErrors(vec![violation]))
}

/// The 404 envelope: standard error-detail body.
pub fn not_found_response() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "detail": "Product not found" })),
    )
        .into_response()
}
