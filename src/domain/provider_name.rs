use std::fmt;
use std::str::FromStr;

/// Text-generation providers, listed in fallback priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderName {
    Gemini,
    Mistral,
    Cohere,
    Groq,
    OpenRouter,
}

impl ProviderName {
    pub const ALL: [ProviderName; 5] = [
        ProviderName::Gemini,
        ProviderName::Mistral,
        ProviderName::Cohere,
        ProviderName::Groq,
        ProviderName::OpenRouter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Gemini => "Gemini",
            ProviderName::Mistral => "Mistral",
            ProviderName::Cohere => "Cohere",
            ProviderName::Groq => "Groq",
            ProviderName::OpenRouter => "OpenRouter",
        }
    }
}

impl FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderName::Gemini),
            "mistral" => Ok(ProviderName::Mistral),
            "cohere" => Ok(ProviderName::Cohere),
            "groq" => Ok(ProviderName::Groq),
            "openrouter" | "open_router" | "open-router" => Ok(ProviderName::OpenRouter),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
