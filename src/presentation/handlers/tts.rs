use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error_response::{error_response, json_rejection_response};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

const TEXT_REQUIRED: &str = "Text is required";

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub voice: i32,
    #[serde(default)]
    pub premium: bool,
}

#[tracing::instrument(skip(state, request))]
pub async fn tts_handler(
    State(state): State<AppState>,
    request: Result<Json<TtsRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection, TEXT_REQUIRED),
    };

    if request.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, TEXT_REQUIRED);
    }

    tracing::debug!(
        text = %sanitize_prompt(&request.text),
        voice = request.voice,
        premium = request.premium,
        "Generating speech"
    );

    match state
        .media_orchestrator
        .synthesize(&request.text, request.voice, request.premium)
        .await
    {
        Ok(audio) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Speech generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate audio")
        }
    }
}
