use std::path::Path;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::error_response::error_response;
use crate::application::ports::TranscriptionError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut upload = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                let extension = field
                    .file_name()
                    .and_then(|name| Path::new(name).extension())
                    .and_then(|ext| ext.to_str())
                    .map(|ext| format!(".{}", ext))
                    .unwrap_or_default();

                match field.bytes().await {
                    Ok(data) => {
                        upload = Some((extension, data));
                        break;
                    }
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                        );
                    }
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    }

    let Some((extension, data)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    // Deleted when dropped at the end of the request.
    let audio_file = match tempfile::Builder::new()
        .prefix("audio_")
        .suffix(&extension)
        .tempfile()
    {
        Ok(file) => file,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create temporary audio file");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save file");
        }
    };

    if let Err(e) = tokio::fs::write(audio_file.path(), &data).await {
        tracing::error!(error = %e, "Failed to write temporary audio file");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save file");
    }

    tracing::info!(bytes = data.len(), "Transcribing uploaded audio");

    // Dropping the handler future (client went away) cancels the poll loop.
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    match state
        .transcription_poller
        .transcribe(audio_file.path(), &cancel)
        .await
    {
        Ok(text) => (StatusCode::OK, Json(TranscribeResponse { text })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            let status = match e {
                TranscriptionError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
                TranscriptionError::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, e.to_string())
        }
    }
}
