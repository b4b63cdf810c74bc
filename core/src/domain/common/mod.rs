pub mod entities;
pub mod services;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ML_SERVICE_URL: &str = "http://localhost:8000/predict";

#[derive(Clone, Debug)]
pub struct KrishiConfig {
    pub llm: LLMConfig,
    pub ml_service: MlServiceConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub credentials: ChatCredentials,
    pub base_url: String,
    pub model: String,
}

#[derive(Clone, Debug)]
pub struct MlServiceConfig {
    pub predict_url: String,
}

/// Chat API key as resolved from the environment.
///
/// `Missing` is a supported mode: the crop doctor answers with a canned
/// example diagnosis instead of calling the chat API.
#[derive(Clone, PartialEq, Eq)]
pub enum ChatCredentials {
    Configured(String),
    Missing,
}

impl ChatCredentials {
    pub fn from_optional(api_key: Option<String>) -> Self {
        match api_key {
            Some(key) if !key.trim().is_empty() => Self::Configured(key.trim().to_string()),
            _ => Self::Missing,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

impl std::fmt::Debug for ChatCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configured(_) => f.write_str("Configured(***)"),
            Self::Missing => f.write_str("Missing"),
        }
    }
}
