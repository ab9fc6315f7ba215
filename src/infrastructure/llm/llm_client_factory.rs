use std::sync::Arc;

use reqwest::Client;

use super::{CohereClient, GeminiClient, GroqClient, MistralClient, OpenRouterClient};
use crate::application::ports::LlmClient;
use crate::domain::ProviderName;
use crate::presentation::config::ProviderSettings;

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(
        provider: ProviderName,
        client: &Client,
        settings: &ProviderSettings,
    ) -> Arc<dyn LlmClient> {
        let api_key = settings.api_key_for(provider);
        if api_key.is_none() {
            tracing::warn!(provider = %provider, "No api key configured for provider");
        }

        let client = client.clone();
        match provider {
            ProviderName::Gemini => Arc::new(GeminiClient::new(client, api_key)),
            ProviderName::Mistral => Arc::new(MistralClient::new(client, api_key)),
            ProviderName::Cohere => Arc::new(CohereClient::new(client, api_key)),
            ProviderName::Groq => Arc::new(GroqClient::new(client, api_key)),
            ProviderName::OpenRouter => Arc::new(OpenRouterClient::new(client, api_key)),
        }
    }

    /// Every text provider, in fallback priority order.
    pub fn create_all(client: &Client, settings: &ProviderSettings) -> Vec<Arc<dyn LlmClient>> {
        ProviderName::ALL
            .into_iter()
            .map(|provider| Self::create(provider, client, settings))
            .collect()
    }
}
