use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::error_response::{error_response, json_rejection_response};
use crate::application::services::GenerationError;
use crate::domain::{Prompt, ProviderName};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

const TEXT_REQUIRED: &str = "Text input is required";

#[derive(Debug, Deserialize)]
pub struct AiRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub mistral: bool,
    #[serde(default)]
    pub cohere: bool,
    #[serde(default)]
    pub groq: bool,
}

impl AiRequest {
    /// Explicit `provider` wins over the boolean shortcuts.
    pub fn forced_provider(&self) -> Result<Option<ProviderName>, String> {
        if let Some(name) = &self.provider {
            return name.parse::<ProviderName>().map(Some);
        }

        Ok([
            (self.mistral, ProviderName::Mistral),
            (self.cohere, ProviderName::Cohere),
            (self.groq, ProviderName::Groq),
        ]
        .into_iter()
        .find_map(|(forced, provider)| forced.then_some(provider)))
    }
}

#[derive(Serialize)]
pub struct BenchmarkResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub time_seconds: f64,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_handler(
    State(state): State<AppState>,
    request: Result<Json<AiRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection, TEXT_REQUIRED),
    };

    let forced = match request.forced_provider() {
        Ok(forced) => forced,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    generate(&state, request.text, forced).await
}

#[tracing::instrument(skip(state, request))]
pub async fn provider_handler(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    request: Result<Json<AiRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection, TEXT_REQUIRED),
    };

    let provider = match provider.parse::<ProviderName>() {
        Ok(provider) => provider,
        Err(e) => return error_response(StatusCode::NOT_FOUND, e),
    };

    generate(&state, request.text, Some(provider)).await
}

async fn generate(state: &AppState, text: String, forced: Option<ProviderName>) -> Response {
    let prompt = Prompt::new(text);
    if prompt.is_blank() {
        return error_response(StatusCode::BAD_REQUEST, TEXT_REQUIRED);
    }

    tracing::debug!(
        prompt = %sanitize_prompt(prompt.as_str()),
        forced = ?forced,
        "Generating text"
    );

    match state
        .fallback_orchestrator
        .generate(&prompt, forced)
        .await
    {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e @ GenerationError::AllProvidersFailed) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Forced provider failed");
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn benchmark_handler(
    State(state): State<AppState>,
    request: Result<Json<AiRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection, TEXT_REQUIRED),
    };

    let prompt = Prompt::new(request.text);
    if prompt.is_blank() {
        return error_response(StatusCode::BAD_REQUEST, TEXT_REQUIRED);
    }

    let report = state.benchmark_orchestrator.benchmark_all(&prompt).await;

    let results: BTreeMap<String, BenchmarkResult> = report
        .into_values()
        .map(|entry| {
            let result = BenchmarkResult {
                response: entry.text().map(str::to_string),
                error: entry.failure_reason(),
                time_seconds: entry.elapsed_seconds,
            };
            (entry.provider.to_string(), result)
        })
        .collect();

    (StatusCode::OK, Json(results)).into_response()
}
