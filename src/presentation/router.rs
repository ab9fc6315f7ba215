use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{REQUEST_ID_HEADER, request_id_middleware};
use crate::presentation::handlers::{
    benchmark_handler, generate_handler, health_handler, provider_handler, transcribe_handler,
    tts_handler, voices_handler,
};
use crate::presentation::state::AppState;

const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(12 * 60 * 60));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/ai", post(generate_handler))
        .route("/api/v1/ai/benchmark", post(benchmark_handler))
        .route("/api/v1/ai/{provider}", post(provider_handler))
        .route("/api/v1/voices", get(voices_handler))
        .route("/api/v1/tts", post(tts_handler))
        .route(
            "/api/v1/transcribe",
            post(transcribe_handler).layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
