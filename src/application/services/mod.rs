mod benchmark_orchestrator;
mod fallback_orchestrator;
mod media_fallback_orchestrator;
mod transcription_poller;

pub use benchmark_orchestrator::{BenchmarkEntry, BenchmarkOrchestrator, BenchmarkReport};
pub use fallback_orchestrator::{FallbackOrchestrator, GenerationError};
pub use media_fallback_orchestrator::MediaFallbackOrchestrator;
pub use transcription_poller::{PollSettings, TranscriptionPoller};
