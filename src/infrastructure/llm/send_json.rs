use reqwest::RequestBuilder;
use serde_json::Value;

use crate::application::ports::LlmClientError;

/// Sends a provider request and decodes a successful body as JSON.
pub(super) async fn send_json(request: RequestBuilder) -> Result<Value, LlmClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| LlmClientError::Transport(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "Provider returned error status");
        return Err(LlmClientError::Status(status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| LlmClientError::InvalidResponse(e.without_url().to_string()))
}
