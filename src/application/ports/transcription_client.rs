use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{TranscriptionJob, TranscriptionJobId};

/// Remote transcription service driven by upload, submit and poll calls.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    /// Streams a local audio file to the provider and returns its upload URL.
    async fn upload(&self, audio_path: &Path) -> Result<String, TranscriptionError>;

    async fn submit(&self, upload_url: &str) -> Result<TranscriptionJobId, TranscriptionError>;

    async fn fetch(
        &self,
        job_id: &TranscriptionJobId,
    ) -> Result<TranscriptionJob, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription api key not configured")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    Transport(String),
    #[error("api returned status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("transcription error: {0}")]
    JobFailed(String),
    #[error("transcription did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("transcription cancelled")]
    Cancelled,
}
