mod chat_completion;
mod cohere_client;
mod gemini_client;
mod groq_client;
mod llm_client_factory;
mod mistral_client;
mod open_router_client;
mod response_text;
mod send_json;

pub use cohere_client::CohereClient;
pub use gemini_client::GeminiClient;
pub use groq_client::GroqClient;
pub use llm_client_factory::LlmClientFactory;
pub use mistral_client::{MistralClient, RetryPolicy};
pub use open_router_client::{DEFAULT_MODELS as OPEN_ROUTER_MODELS, OpenRouterClient};
pub use response_text::{
    extract_chat_completion_text, extract_cohere_text, extract_gemini_text, extract_text,
};
