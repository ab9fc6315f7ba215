use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::PollSettings;
use crate::domain::ProviderName;
use crate::infrastructure::http_client::DEFAULT_REQUEST_TIMEOUT;
use crate::infrastructure::speech::{EDGE_TTS_PROGRAM, EDGE_TTS_VOICE};

/// Variable names used by earlier deployments, mapped onto settings keys.
const LEGACY_VARIABLES: [(&str, &str); 8] = [
    ("GOOGLE_GEMINI_API_KEY1", "providers.gemini_api_key"),
    ("MISTRAL_KEY", "providers.mistral_api_key"),
    ("COHERE_KEY", "providers.cohere_api_key"),
    ("GROQ_KEY", "providers.groq_api_key"),
    ("OPENROUTER_KEY", "providers.open_router_api_key"),
    ("ELEVENLABS_KEY1", "providers.eleven_labs_api_key"),
    ("ASSEMBLYAI_KEY", "providers.assembly_ai_api_key"),
    ("PORT", "server.port"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub providers: ProviderSettings,
    pub speech: SpeechSettings,
    pub transcription: TranscriptionSettings,
}

impl Settings {
    /// Layers `appsettings.{env}` (optional), `APP__*` variables and legacy variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            );

        for (variable, key) in LEGACY_VARIABLES {
            let value = std::env::var(variable).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            cors_origins: vec![
                "capacitor://localhost".to_string(),
                "http://localhost".to_string(),
                "http://localhost:4200".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
    pub filter: Option<String>,
}

/// One optional secret per external provider; a missing key only disables that provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub gemini_api_key: Option<String>,
    pub mistral_api_key: Option<String>,
    pub cohere_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub open_router_api_key: Option<String>,
    pub eleven_labs_api_key: Option<String>,
    pub assembly_ai_api_key: Option<String>,
    pub request_timeout_seconds: u64,
}

impl ProviderSettings {
    pub fn api_key_for(&self, provider: ProviderName) -> Option<String> {
        match provider {
            ProviderName::Gemini => self.gemini_api_key.clone(),
            ProviderName::Mistral => self.mistral_api_key.clone(),
            ProviderName::Cohere => self.cohere_api_key.clone(),
            ProviderName::Groq => self.groq_api_key.clone(),
            ProviderName::OpenRouter => self.open_router_api_key.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            mistral_api_key: None,
            cohere_api_key: None,
            groq_api_key: None,
            open_router_api_key: None,
            eleven_labs_api_key: None,
            assembly_ai_api_key: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub edge_tts_program: String,
    pub edge_tts_voice: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            edge_tts_program: EDGE_TTS_PROGRAM.to_string(),
            edge_tts_voice: EDGE_TTS_VOICE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub poll_interval_ms: u64,
    pub max_wait_seconds: u64,
}

impl TranscriptionSettings {
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_wait: Duration::from_secs(self.max_wait_seconds),
        }
    }
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            max_wait_seconds: 300,
        }
    }
}
