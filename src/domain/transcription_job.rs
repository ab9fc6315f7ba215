use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranscriptionJobId(String);

impl TranscriptionJobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranscriptionJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionStatus {
    Queued,
    Processing,
    Completed,
    Error,
}

impl TranscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionStatus::Queued => "queued",
            TranscriptionStatus::Processing => "processing",
            TranscriptionStatus::Completed => "completed",
            TranscriptionStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptionStatus::Completed | TranscriptionStatus::Error
        )
    }
}

impl FromStr for TranscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(TranscriptionStatus::Queued),
            "processing" => Ok(TranscriptionStatus::Processing),
            "completed" => Ok(TranscriptionStatus::Completed),
            "error" => Ok(TranscriptionStatus::Error),
            _ => Err(format!("Invalid transcription status: {}", s)),
        }
    }
}

impl fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a remote transcription job as last observed by polling.
#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub id: TranscriptionJobId,
    pub status: TranscriptionStatus,
    pub text: Option<String>,
    pub error_message: Option<String>,
}
