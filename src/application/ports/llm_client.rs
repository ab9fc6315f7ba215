use async_trait::async_trait;

use crate::domain::{Prompt, ProviderName};

/// A text-generation provider reachable over HTTP.
#[async_trait]
pub trait LlmClient: Send + Sync {
    fn provider(&self) -> ProviderName;

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmClientError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LlmClientError {
    #[error("{0} api key not configured")]
    MissingApiKey(ProviderName),
    #[error("api request failed: {0}")]
    Transport(String),
    #[error("api returned status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("no text found in response")]
    NoTextFound,
    #[error("all models unavailable")]
    ModelsUnavailable,
}
