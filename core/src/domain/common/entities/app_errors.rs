use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Please describe the crop problem or upload an image")]
    MissingDescription,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later")]
    RateLimited,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Error communicating with ML service")]
    MlServiceError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
