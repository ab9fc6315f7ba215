use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

/// Tries text-generation providers one after another until one answers.
pub struct FallbackOrchestrator {
    clients: Vec<Arc<dyn LlmClient>>,
}

impl FallbackOrchestrator {
    /// `clients` must be given in priority order.
    pub fn new(clients: Vec<Arc<dyn LlmClient>>) -> Self {
        Self { clients }
    }

    pub fn providers(&self) -> Vec<ProviderName> {
        self.clients.iter().map(|c| c.provider()).collect()
    }

    pub async fn generate(
        &self,
        prompt: &Prompt,
        forced: Option<ProviderName>,
    ) -> Result<String, GenerationError> {
        if let Some(provider) = forced {
            let client = self
                .clients
                .iter()
                .find(|c| c.provider() == provider)
                .ok_or(GenerationError::ProviderUnavailable(provider))?;

            tracing::debug!(provider = %provider, "Using forced provider");
            return client.complete(prompt).await.map_err(GenerationError::Provider);
        }

        for client in &self.clients {
            match client.complete(prompt).await {
                Ok(text) => {
                    tracing::info!(provider = %client.provider(), "Provider answered");
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!(
                        provider = %client.provider(),
                        error = %e,
                        "Provider failed, trying next"
                    );
                }
            }
        }

        tracing::error!(
            providers = self.clients.len(),
            "Every provider in the fallback chain failed"
        );
        Err(GenerationError::AllProvidersFailed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("all providers failed")]
    AllProvidersFailed,
    #[error("provider {0} is not available")]
    ProviderUnavailable(ProviderName),
    #[error(transparent)]
    Provider(LlmClientError),
}
