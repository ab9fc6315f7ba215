use std::sync::Arc;

use crate::application::services::{
    BenchmarkOrchestrator, FallbackOrchestrator, MediaFallbackOrchestrator, TranscriptionPoller,
};

#[derive(Clone)]
pub struct AppState {
    pub fallback_orchestrator: Arc<FallbackOrchestrator>,
    pub benchmark_orchestrator: Arc<BenchmarkOrchestrator>,
    pub media_orchestrator: Arc<MediaFallbackOrchestrator>,
    pub transcription_poller: Arc<TranscriptionPoller>,
}
