use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{SpeechError, SpeechSynthesizer};

pub const DEFAULT_PROGRAM: &str = "edge-tts";
pub const DEFAULT_VOICE: &str = "en-US-ChristopherNeural";

/// Runs the `edge-tts` command line tool against a per-call scratch directory.
pub struct EdgeTtsSynthesizer {
    program: String,
    voice: String,
}

impl EdgeTtsSynthesizer {
    pub fn new(program: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            voice: voice.into(),
        }
    }
}

impl Default for EdgeTtsSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_VOICE)
    }
}

#[async_trait]
impl SpeechSynthesizer for EdgeTtsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        // Removed on drop, whichever way this function returns.
        let scratch = tempfile::Builder::new().prefix("tts_").tempdir()?;
        let text_path = scratch.path().join("input.txt");
        let audio_path = scratch.path().join("output.mp3");

        tokio::fs::write(&text_path, text).await?;

        let output = Command::new(&self.program)
            .arg("--file")
            .arg(&text_path)
            .arg("--voice")
            .arg(&self.voice)
            .arg("--write-media")
            .arg(&audio_path)
            .output()
            .await
            .map_err(|e| SpeechError::ProcessFailed(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::ProcessFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let audio = tokio::fs::read(&audio_path).await?;
        tracing::debug!(bytes = audio.len(), "edge-tts produced audio");

        Ok(audio)
    }
}
