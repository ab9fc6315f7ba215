use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::response_text::extract_cohere_text;
use super::send_json::send_json;
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

const DEFAULT_BASE_URL: &str = "https://api.cohere.ai/v1";
const MODEL: &str = "command-r";

pub struct CohereClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Serialize)]
struct CohereChatRequest<'a> {
    message: &'a str,
    model: &'static str,
    temperature: f32,
    max_tokens: u32,
}

impl CohereClient {
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
impl LlmClient for CohereClient {
    fn provider(&self) -> ProviderName {
        ProviderName::Cohere
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingApiKey(ProviderName::Cohere))?;

        let request_body = CohereChatRequest {
            message: prompt.as_str(),
            model: MODEL,
            temperature: 0.7,
            max_tokens: 1000,
        };

        let request = self
            .client
            .post(format!("{}/chat", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body);

        let document = send_json(request).await?;
        extract_cohere_text(&document)
    }
}
