use crate::{
    domain::common::{
        ChatCredentials, KrishiConfig,
        entities::app_errors::CoreError,
        services::{ChatBackend, Service},
    },
    infrastructure::{llm::OpenAIChatClient, ml::HttpPredictionClient},
};

pub type KrishiService = Service<OpenAIChatClient, HttpPredictionClient>;

pub fn create_service(config: KrishiConfig) -> Result<KrishiService, CoreError> {
    if config.ml_service.predict_url.trim().is_empty() {
        return Err(CoreError::InvalidConfiguration(
            "ML service URL must not be empty".to_string(),
        ));
    }

    let chat_backend = match config.llm.credentials {
        ChatCredentials::Configured(api_key) => ChatBackend::Live(OpenAIChatClient::new(
            api_key,
            config.llm.base_url,
            config.llm.model,
        )),
        ChatCredentials::Missing => {
            tracing::warn!("No chat API key configured, crop doctor will serve mock diagnoses");
            ChatBackend::Unconfigured
        }
    };

    let prediction_client = HttpPredictionClient::new(config.ml_service.predict_url);

    Ok(Service::new(chat_backend, prediction_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{
        DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_ML_SERVICE_URL, LLMConfig,
        MlServiceConfig,
    };

    fn config(credentials: ChatCredentials, predict_url: &str) -> KrishiConfig {
        KrishiConfig {
            llm: LLMConfig {
                credentials,
                base_url: DEFAULT_CHAT_BASE_URL.to_string(),
                model: DEFAULT_CHAT_MODEL.to_string(),
            },
            ml_service: MlServiceConfig {
                predict_url: predict_url.to_string(),
            },
        }
    }

    #[test]
    fn test_backend_follows_credentials() {
        let service = create_service(config(
            ChatCredentials::Configured("sk-test".to_string()),
            DEFAULT_ML_SERVICE_URL,
        ))
        .unwrap();
        assert!(matches!(service.chat_backend, ChatBackend::Live(_)));

        let service =
            create_service(config(ChatCredentials::Missing, DEFAULT_ML_SERVICE_URL)).unwrap();
        assert!(matches!(service.chat_backend, ChatBackend::Unconfigured));
    }

    #[test]
    fn test_empty_ml_url_is_rejected() {
        let err = create_service(config(ChatCredentials::Missing, " ")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }
}
