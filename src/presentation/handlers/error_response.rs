use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Body that failed to deserialize (bad JSON, wrong content type): a 400 with `message`.
pub fn json_rejection_response(rejection: JsonRejection, message: &str) -> Response {
    tracing::warn!(
        status = rejection.status().as_u16(),
        reason = %rejection.body_text(),
        "Rejected request body"
    );
    error_response(StatusCode::BAD_REQUEST, message)
}
