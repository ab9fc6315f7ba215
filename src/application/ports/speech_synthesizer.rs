use async_trait::async_trait;

use crate::domain::VoiceProfile;

/// Premium speech provider that lets the caller pick a voice.
#[async_trait]
pub trait VoiceSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, SpeechError>;
}

/// Baseline speech provider with a single fixed voice.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech api key not configured")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    Transport(String),
    #[error("api returned status {0}")]
    Status(u16),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("speech process failed: {0}")]
    ProcessFailed(String),
}
