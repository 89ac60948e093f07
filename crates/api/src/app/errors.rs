use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use saberwing_ai::AiError;
use saberwing_core::DomainError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "invariant_violation", msg)
        }
    }
}

/// Analysis failures are server-side: the request was already validated, so
/// anything the estimator rejects is bad catalog data or an internal fault.
pub fn ai_error_to_response(err: AiError) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "analysis_failed", err.to_string())
}
