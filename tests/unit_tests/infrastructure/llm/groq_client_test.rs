use lingobot::application::ports::{LlmClient, LlmClientError};
use lingobot::domain::{Prompt, ProviderName};
use lingobot::infrastructure::llm::GroqClient;
use serde_json::json;

use crate::helpers::{MockHttpServer, ScriptedResponse};

#[tokio::test]
async fn given_valid_response_when_completing_then_returns_first_choice() {
    let server = MockHttpServer::start(vec![ScriptedResponse::json(
        200,
        json!({ "choices": [ { "message": { "content": "Konnichiwa" } } ] }),
    )])
    .await;
    let client = GroqClient::new(reqwest::Client::new(), Some("groq-key".to_string()))
        .with_base_url(&server.base_url);

    let result = client.complete(&Prompt::from("Greet me in Japanese")).await;

    assert_eq!(result.unwrap(), "Konnichiwa");
    let request = &server.requests()[0];
    assert_eq!(request.path, "/chat/completions");
    assert_eq!(request.header("authorization"), Some("Bearer groq-key"));

    let body = request.json();
    assert_eq!(body["model"], "meta-llama/llama-4-scout-17b-16e-instruct");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Greet me in Japanese");
}

#[tokio::test]
async fn given_missing_api_key_when_completing_then_fails_without_network_call() {
    let server = MockHttpServer::start(vec![ScriptedResponse::status(200)]).await;
    let client = GroqClient::new(reqwest::Client::new(), None).with_base_url(&server.base_url);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(
        result,
        Err(LlmClientError::MissingApiKey(ProviderName::Groq))
    );
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn given_server_error_when_completing_then_does_not_retry() {
    let server = MockHttpServer::start(vec![ScriptedResponse::status(500)]).await;
    let client = GroqClient::new(reqwest::Client::new(), Some("k".to_string()))
        .with_base_url(&server.base_url);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(result, Err(LlmClientError::Status(500)));
    assert_eq!(server.hits(), 1);
}
