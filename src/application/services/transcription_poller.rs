use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{TranscriptionClient, TranscriptionError};
use crate::domain::TranscriptionStatus;

#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_wait: Duration::from_secs(300),
        }
    }
}

/// Uploads audio, submits a transcription job and polls it to a terminal state.
pub struct TranscriptionPoller {
    client: Arc<dyn TranscriptionClient>,
    settings: PollSettings,
}

impl TranscriptionPoller {
    pub fn new(client: Arc<dyn TranscriptionClient>, settings: PollSettings) -> Self {
        Self { client, settings }
    }

    pub async fn transcribe(
        &self,
        audio_path: &Path,
        cancel: &CancellationToken,
    ) -> Result<String, TranscriptionError> {
        let upload_url = self.client.upload(audio_path).await?;
        let job_id = self.client.submit(&upload_url).await?;

        tracing::info!(job_id = %job_id, "Transcription job submitted");

        let deadline = Instant::now() + self.settings.max_wait;
        let mut polls = 0u32;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => return Err(TranscriptionError::Cancelled),
                _ = tokio::time::sleep(self.settings.interval) => {}
            }

            let job = tokio::select! {
                _ = cancel.cancelled() => return Err(TranscriptionError::Cancelled),
                job = self.client.fetch(&job_id) => job?,
            };
            polls += 1;

            tracing::debug!(
                job_id = %job_id,
                status = %job.status,
                polls,
                "Polled transcription job"
            );

            if job.status.is_terminal() {
                return match job.status {
                    TranscriptionStatus::Completed => Ok(job.text.unwrap_or_default()),
                    _ => Err(TranscriptionError::JobFailed(
                        job.error_message.unwrap_or_default(),
                    )),
                };
            }

            if Instant::now() >= deadline {
                tracing::warn!(
                    job_id = %job_id,
                    polls,
                    "Transcription job exceeded max wait"
                );
                return Err(TranscriptionError::TimedOut(self.settings.max_wait));
            }
        }
    }
}
