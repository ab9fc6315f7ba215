mod ai;
mod error_response;
mod health;
mod transcribe;
mod tts;
mod voices;

pub use ai::{AiRequest, BenchmarkResult, benchmark_handler, generate_handler, provider_handler};
pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use transcribe::transcribe_handler;
pub use tts::tts_handler;
pub use voices::voices_handler;
