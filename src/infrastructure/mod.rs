pub mod http_client;
pub mod llm;
pub mod observability;
pub mod speech;
pub mod transcription;
