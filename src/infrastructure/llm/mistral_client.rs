use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::chat_completion::ChatCompletionRequest;
use super::response_text::extract_chat_completion_text;
use super::send_json::send_json;
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
const MODEL: &str = "mistral-tiny";
const MAX_TOKENS: u32 = 2000;

/// Retry schedule for the rate-limited Mistral API.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay after the zero-based `attempt` failed: base, 2 * base, 4 * base...
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

pub struct MistralClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
}

impl MistralClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

fn is_retryable(error: &LlmClientError) -> bool {
    matches!(
        error,
        LlmClientError::Status(429) | LlmClientError::Transport(_)
    )
}

#[async_trait]
impl LlmClient for MistralClient {
    fn provider(&self) -> ProviderName {
        ProviderName::Mistral
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingApiKey(ProviderName::Mistral))?;

        let request_body = ChatCompletionRequest::user(MODEL, prompt.as_str(), Some(MAX_TOKENS));
        let url = format!("{}/chat/completions", self.base_url);
        let max_attempts = self.retry.max_attempts.max(1);

        let mut attempt = 0;
        loop {
            let request = self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .json(&request_body);

            match send_json(request).await {
                Ok(document) => return extract_chat_completion_text(&document),
                Err(e) if is_retryable(&e) && attempt + 1 < max_attempts => {
                    let delay = self.retry.delay_after(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Mistral request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
