use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use lingobot::application::services::{
    BenchmarkOrchestrator, FallbackOrchestrator, MediaFallbackOrchestrator, TranscriptionPoller,
};
use lingobot::infrastructure::http_client::build_http_client;
use lingobot::infrastructure::llm::LlmClientFactory;
use lingobot::infrastructure::observability::{TracingConfig, init_tracing};
use lingobot::infrastructure::speech::{EdgeTtsSynthesizer, ElevenLabsSynthesizer};
use lingobot::infrastructure::transcription::AssemblyAiClient;
use lingobot::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    let http_client = build_http_client(settings.providers.request_timeout())
        .context("Failed to build HTTP client")?;

    let llm_clients = LlmClientFactory::create_all(&http_client, &settings.providers);

    let premium_speech = Arc::new(ElevenLabsSynthesizer::new(
        http_client.clone(),
        settings.providers.eleven_labs_api_key.clone(),
    ));
    let baseline_speech = Arc::new(EdgeTtsSynthesizer::new(
        settings.speech.edge_tts_program.clone(),
        settings.speech.edge_tts_voice.clone(),
    ));

    let transcription_client = Arc::new(AssemblyAiClient::new(
        http_client.clone(),
        settings.providers.assembly_ai_api_key.clone(),
    ));

    let state = AppState {
        fallback_orchestrator: Arc::new(FallbackOrchestrator::new(llm_clients.clone())),
        benchmark_orchestrator: Arc::new(BenchmarkOrchestrator::new(llm_clients)),
        media_orchestrator: Arc::new(MediaFallbackOrchestrator::new(
            premium_speech,
            baseline_speech,
        )),
        transcription_poller: Arc::new(TranscriptionPoller::new(
            transcription_client,
            settings.transcription.poll_settings(),
        )),
    };

    let router = create_router(state, &settings.server.cors_origins);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
