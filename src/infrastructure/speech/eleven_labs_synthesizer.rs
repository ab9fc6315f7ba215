use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{SpeechError, VoiceSynthesizer};
use crate::domain::VoiceProfile;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";
const MODEL_ID: &str = "eleven_multilingual_v2";

pub struct ElevenLabsSynthesizer {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'static str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

impl ElevenLabsSynthesizer {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl VoiceSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, SpeechError> {
        let api_key = self.api_key.as_deref().ok_or(SpeechError::MissingApiKey)?;

        let request_body = TextToSpeechRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::default(),
        };

        tracing::debug!(voice = voice.name, "Sending text to ElevenLabs");

        let response = self
            .client
            .post(format!("{}/text-to-speech/{}", self.base_url, voice.id))
            .header("xi-api-key", api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SpeechError::Transport(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(SpeechError::Status(response.status().as_u16()));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Transport(e.without_url().to_string()))?;

        Ok(audio.to_vec())
    }
}
