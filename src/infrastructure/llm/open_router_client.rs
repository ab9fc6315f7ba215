use async_trait::async_trait;
use reqwest::Client;

use super::chat_completion::ChatCompletionRequest;
use super::response_text::extract_chat_completion_text;
use super::send_json::send_json;
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const MAX_TOKENS: u32 = 1000;
const REFERER: &str = "https://lingobot-api.onrender.com";
const TITLE: &str = "Lingobot API";

pub const DEFAULT_MODELS: [&str; 4] = [
    "qwen/qwen3-235b-a22b-07-25:free",
    "meta-llama/llama-3.1-8b-instruct:free",
    "microsoft/phi-3-mini-128k-instruct:free",
    "google/gemma-2-9b-it:free",
];

/// OpenRouter client that walks a list of free models until one is up.
pub struct OpenRouterClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    models: Vec<String>,
}

impl OpenRouterClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    fn provider(&self) -> ProviderName {
        ProviderName::OpenRouter
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingApiKey(ProviderName::OpenRouter))?;

        let url = format!("{}/chat/completions", self.base_url);

        for model in &self.models {
            let request = self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .header("HTTP-Referer", REFERER)
                .header("X-Title", TITLE)
                .json(&ChatCompletionRequest::user(
                    model,
                    prompt.as_str(),
                    Some(MAX_TOKENS),
                ));

            match send_json(request).await {
                Ok(document) => return extract_chat_completion_text(&document),
                Err(e @ (LlmClientError::Status(503) | LlmClientError::Transport(_))) => {
                    tracing::warn!(model = %model, error = %e, "OpenRouter model unavailable");
                }
                Err(e) => return Err(e),
            }
        }

        Err(LlmClientError::ModelsUnavailable)
    }
}
