use lingobot::application::ports::LlmClientError;
use lingobot::domain::{Prompt, ProviderName};
use lingobot::infrastructure::llm::LlmClientFactory;
use lingobot::presentation::config::ProviderSettings;

#[test]
fn given_settings_when_creating_all_then_returns_clients_in_priority_order() {
    let settings = ProviderSettings::default();
    let clients = LlmClientFactory::create_all(&reqwest::Client::new(), &settings);

    let providers: Vec<ProviderName> = clients.iter().map(|c| c.provider()).collect();
    assert_eq!(providers, ProviderName::ALL.to_vec());
}

#[tokio::test]
async fn given_no_keys_when_completing_then_every_client_reports_missing_key() {
    let settings = ProviderSettings::default();
    let clients = LlmClientFactory::create_all(&reqwest::Client::new(), &settings);

    for client in clients {
        let result = client.complete(&Prompt::from("hi")).await;
        assert_eq!(result, Err(LlmClientError::MissingApiKey(client.provider())));
    }
}

#[test]
fn given_key_for_one_provider_when_looking_up_then_only_that_provider_has_it() {
    let settings = ProviderSettings {
        groq_api_key: Some("groq-key".to_string()),
        ..ProviderSettings::default()
    };

    assert_eq!(
        settings.api_key_for(ProviderName::Groq).as_deref(),
        Some("groq-key")
    );
    assert!(settings.api_key_for(ProviderName::Gemini).is_none());
    assert!(settings.api_key_for(ProviderName::OpenRouter).is_none());
}

#[test]
fn given_single_provider_when_creating_then_client_reports_that_provider() {
    let client = LlmClientFactory::create(
        ProviderName::Cohere,
        &reqwest::Client::new(),
        &ProviderSettings::default(),
    );

    assert_eq!(client.provider(), ProviderName::Cohere);
}
