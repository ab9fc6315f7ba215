use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::response_text::extract_gemini_text;
use super::send_json::send_json;
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.0-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl GeminiClient {
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
impl LlmClient for GeminiClient {
    fn provider(&self) -> ProviderName {
        ProviderName::Gemini
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmClientError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmClientError::MissingApiKey(ProviderName::Gemini))?;

        let request_body = GenerateContentRequest {
            contents: [Content {
                parts: [Part {
                    text: prompt.as_str(),
                }],
            }],
        };

        let request = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, MODEL))
            .header(API_KEY_HEADER, api_key)
            .json(&request_body);

        let document = send_json(request).await?;
        extract_gemini_text(&document)
    }
}
