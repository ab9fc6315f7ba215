mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use settings::{
    LoggingSettings, ProviderSettings, ServerSettings, Settings, SpeechSettings,
    TranscriptionSettings,
};
