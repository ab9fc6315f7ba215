use async_trait::async_trait;
use reqwest::Client;

use super::chat_completion::ChatCompletionRequest;
use super::response_text::extract_chat_completion_text;
use super::send_json::send_json;
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GroqClient {
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
}

#[async_trait]
impl LlmClient for GroqClient {
    fn provider(&self) -> ProviderName {
        ProviderName::Groq
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingApiKey(ProviderName::Groq))?;

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&ChatCompletionRequest::user(MODEL, prompt.as_str(), None));

        let document = send_json(request).await?;
        extract_chat_completion_text(&document)
    }
}
