mod prompt;
mod provider_name;
mod transcription_job;
mod voice;

pub use prompt::Prompt;
pub use provider_name::ProviderName;
pub use transcription_job::{TranscriptionJob, TranscriptionJobId, TranscriptionStatus};
pub use voice::{VoiceCatalog, VoiceProfile};
