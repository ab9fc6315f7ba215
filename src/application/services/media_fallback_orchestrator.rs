use std::sync::Arc;

use crate::application::ports::{SpeechError, SpeechSynthesizer, VoiceSynthesizer};
use crate::domain::VoiceCatalog;

/// Text-to-speech with a premium voice provider and a baseline fallback.
pub struct MediaFallbackOrchestrator {
    premium: Arc<dyn VoiceSynthesizer>,
    baseline: Arc<dyn SpeechSynthesizer>,
}

impl MediaFallbackOrchestrator {
    pub fn new(premium: Arc<dyn VoiceSynthesizer>, baseline: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { premium, baseline }
    }

    pub async fn synthesize(
        &self,
        text: &str,
        voice_index: i32,
        premium: bool,
    ) -> Result<Vec<u8>, SpeechError> {
        let voice = VoiceCatalog::resolve(voice_index);

        if premium {
            match self.premium.synthesize(text, voice).await {
                Ok(audio) => {
                    tracing::info!(
                        voice = voice.name,
                        bytes = audio.len(),
                        "Premium speech generated"
                    );
                    return Ok(audio);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Premium speech failed, using baseline voice");
                }
            }
        }

        let audio = self.baseline.synthesize(text).await?;
        tracing::info!(bytes = audio.len(), "Baseline speech generated");
        Ok(audio)
    }
}
