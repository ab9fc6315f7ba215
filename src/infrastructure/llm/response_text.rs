use serde_json::Value;

use crate::application::ports::LlmClientError;

const GEMINI_TEXT: &str = "/candidates/0/content/parts/0/text";
const CHAT_COMPLETION_TEXT: &str = "/choices/0/message/content";
const COHERE_TEXT: &str = "/text";

/// Reads the string at `pointer` (RFC 6901) from a provider response.
pub fn extract_text(document: &Value, pointer: &str) -> Result<String, LlmClientError> {
    document
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(LlmClientError::NoTextFound)
}

pub fn extract_gemini_text(document: &Value) -> Result<String, LlmClientError> {
    extract_text(document, GEMINI_TEXT)
}

/// Shape shared by OpenAI-compatible chat APIs (Mistral, Groq, OpenRouter).
pub fn extract_chat_completion_text(document: &Value) -> Result<String, LlmClientError> {
    extract_text(document, CHAT_COMPLETION_TEXT)
}

pub fn extract_cohere_text(document: &Value) -> Result<String, LlmClientError> {
    extract_text(document, COHERE_TEXT)
}
