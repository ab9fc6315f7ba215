mod llm_client;
mod speech_synthesizer;
mod transcription_client;

pub use llm_client::{LlmClient, LlmClientError};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer, VoiceSynthesizer};
pub use transcription_client::{TranscriptionClient, TranscriptionError};
