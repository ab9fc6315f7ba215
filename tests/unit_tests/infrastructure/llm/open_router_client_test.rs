use lingobot::application::ports::{LlmClient, LlmClientError};
use lingobot::domain::{Prompt, ProviderName};
use lingobot::infrastructure::llm::{OPEN_ROUTER_MODELS, OpenRouterClient};
use serde_json::json;

use crate::helpers::{MockHttpServer, ScriptedResponse, unreachable_base_url};

fn open_router_client(base_url: &str) -> OpenRouterClient {
    OpenRouterClient::new(reqwest::Client::new(), Some("router-key".to_string()))
        .with_base_url(base_url)
}

fn chat_reply(text: &str) -> ScriptedResponse {
    ScriptedResponse::json(
        200,
        json!({ "choices": [ { "message": { "content": text } } ] }),
    )
}

fn requested_models(server: &MockHttpServer) -> Vec<String> {
    server
        .requests()
        .iter()
        .map(|r| r.json()["model"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn given_first_model_unavailable_when_completing_then_uses_second_model() {
    let server =
        MockHttpServer::start(vec![ScriptedResponse::status(503), chat_reply("Ahoj")]).await;
    let client = open_router_client(&server.base_url);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(result.unwrap(), "Ahoj");
    assert_eq!(
        requested_models(&server),
        vec![OPEN_ROUTER_MODELS[0], OPEN_ROUTER_MODELS[1]]
    );
}

#[tokio::test]
async fn given_every_model_unavailable_when_completing_then_returns_models_unavailable() {
    let server = MockHttpServer::start(vec![ScriptedResponse::status(503)]).await;
    let client = open_router_client(&server.base_url);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(result, Err(LlmClientError::ModelsUnavailable));
    assert_eq!(requested_models(&server), OPEN_ROUTER_MODELS.to_vec());
}

#[tokio::test]
async fn given_unauthorized_when_completing_then_stops_without_trying_other_models() {
    let server =
        MockHttpServer::start(vec![ScriptedResponse::status(401), chat_reply("unused")]).await;
    let client = open_router_client(&server.base_url);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(result, Err(LlmClientError::Status(401)));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn given_request_when_completing_then_sends_attribution_headers() {
    let server = MockHttpServer::start(vec![chat_reply("ok")]).await;
    let client = open_router_client(&server.base_url);

    client.complete(&Prompt::from("hi")).await.unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.path, "/chat/completions");
    assert_eq!(request.header("authorization"), Some("Bearer router-key"));
    assert!(request.header("http-referer").is_some());
    assert_eq!(request.header("x-title"), Some("Lingobot API"));
    assert_eq!(request.json()["max_tokens"], 1000);
}

#[tokio::test]
async fn given_custom_models_when_completing_then_tries_only_those() {
    let server = MockHttpServer::start(vec![ScriptedResponse::status(503)]).await;
    let client = open_router_client(&server.base_url)
        .with_models(vec!["a/one:free".to_string(), "b/two:free".to_string()]);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(result, Err(LlmClientError::ModelsUnavailable));
    assert_eq!(requested_models(&server), vec!["a/one:free", "b/two:free"]);
}

#[tokio::test]
async fn given_unreachable_host_when_completing_then_exhausts_models() {
    let client = open_router_client(&unreachable_base_url().await);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(result, Err(LlmClientError::ModelsUnavailable));
}

#[tokio::test]
async fn given_missing_api_key_when_completing_then_fails_without_network_call() {
    let server = MockHttpServer::start(vec![chat_reply("unused")]).await;
    let client =
        OpenRouterClient::new(reqwest::Client::new(), None).with_base_url(&server.base_url);

    let result = client.complete(&Prompt::from("hi")).await;

    assert_eq!(
        result,
        Err(LlmClientError::MissingApiKey(ProviderName::OpenRouter))
    );
    assert_eq!(server.hits(), 0);
}
