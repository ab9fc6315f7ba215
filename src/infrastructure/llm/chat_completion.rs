use serde::Serialize;

#[derive(Serialize)]
pub(super) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 1],
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn user(model: &'a str, content: &'a str, max_tokens: Option<u32>) -> Self {
        Self {
            model,
            messages: [ChatMessage {
                role: "user",
                content,
            }],
            temperature: 0.7,
            max_tokens,
        }
    }
}
