use std::path::Path;

use async_trait::async_trait;
use reqwest::{Body, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;

use crate::application::ports::{TranscriptionClient, TranscriptionError};
use crate::domain::{TranscriptionJob, TranscriptionJobId, TranscriptionStatus};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";
const SPEECH_MODEL: &str = "universal";

pub struct AssemblyAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
    speech_model: &'static str,
}

#[derive(Deserialize)]
struct TranscriptResponse {
    id: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AssemblyAiClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn api_key(&self) -> Result<&str, TranscriptionError> {
        self.api_key
            .as_deref()
            .ok_or(TranscriptionError::MissingApiKey)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, TranscriptionError> {
    let response = request
        .send()
        .await
        .map_err(|e| TranscriptionError::Transport(e.without_url().to_string()))?;

    if !response.status().is_success() {
        return Err(TranscriptionError::Status(response.status().as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| TranscriptionError::InvalidResponse(e.without_url().to_string()))
}

#[async_trait]
impl TranscriptionClient for AssemblyAiClient {
    async fn upload(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let api_key = self.api_key()?;
        let file = tokio::fs::File::open(audio_path).await?;

        tracing::debug!(path = %audio_path.display(), "Uploading audio to AssemblyAI");

        let request = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header(reqwest::header::AUTHORIZATION, api_key)
            .body(Body::wrap_stream(ReaderStream::new(file)));

        let upload: UploadResponse = send(request).await?;
        Ok(upload.upload_url)
    }

    async fn submit(&self, upload_url: &str) -> Result<TranscriptionJobId, TranscriptionError> {
        let api_key = self.api_key()?;

        let request = self
            .client
            .post(format!("{}/transcript", self.base_url))
            .header(reqwest::header::AUTHORIZATION, api_key)
            .json(&TranscriptRequest {
                audio_url: upload_url,
                speech_model: SPEECH_MODEL,
            });

        let transcript: TranscriptResponse = send(request).await?;
        Ok(TranscriptionJobId::new(transcript.id))
    }

    async fn fetch(
        &self,
        job_id: &TranscriptionJobId,
    ) -> Result<TranscriptionJob, TranscriptionError> {
        let api_key = self.api_key()?;

        let request = self
            .client
            .get(format!("{}/transcript/{}", self.base_url, job_id))
            .header(reqwest::header::AUTHORIZATION, api_key);

        let transcript: TranscriptResponse = send(request).await?;
        let status = transcript
            .status
            .as_deref()
            .unwrap_or_default()
            .parse::<TranscriptionStatus>()
            .map_err(TranscriptionError::InvalidResponse)?;

        Ok(TranscriptionJob {
            id: TranscriptionJobId::new(transcript.id),
            status,
            text: transcript.text,
            error_message: transcript.error,
        })
    }
}
