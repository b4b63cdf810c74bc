use tracing::{info, warn};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::{ChatBackend, Service},
    },
    crop_doctor::{
        entities::{CropDiagnosis, DiagnosisSource},
        keywords::select_by_keywords,
        language::detect_language,
        parser::parse_diagnosis,
        ports::{ChatClient, CropDoctorService},
        prompts::{FALLBACK_RAW_RESPONSE, MOCK_RAW_RESPONSE, build_messages, mock_diagnosis},
        value_objects::DiagnoseCropInput,
    },
    prediction::ports::PredictionClient,
};

impl<CC, PC> CropDoctorService for Service<CC, PC>
where
    CC: ChatClient,
    PC: PredictionClient,
{
    async fn diagnose_crop(&self, input: DiagnoseCropInput) -> Result<CropDiagnosis, CoreError> {
        // 1. Validate input
        if !input.has_description() {
            return Err(CoreError::MissingDescription);
        }

        // 2. Detect language
        let language = detect_language(&input.text);

        info!(
            text_length = input.text.len(),
            has_image = input.image.is_some(),
            language = %language,
            "Diagnosing crop problem"
        );

        // 3. Without credentials, answer with the example diagnosis
        let client = match &self.chat_backend {
            ChatBackend::Live(client) => client,
            ChatBackend::Unconfigured => {
                warn!("Chat API key not configured, returning mock diagnosis");
                return Ok(CropDiagnosis {
                    language,
                    diagnosis: mock_diagnosis(),
                    source: DiagnosisSource::Mock,
                    raw_response: MOCK_RAW_RESPONSE.to_string(),
                });
            }
        };

        // 4. Call the chat API once
        let messages = build_messages(&input, language);

        match client.complete(messages).await {
            // 5. Normalize the reply
            Ok(reply) => Ok(CropDiagnosis {
                language,
                diagnosis: parse_diagnosis(&reply),
                source: DiagnosisSource::Model,
                raw_response: reply,
            }),
            Err(e @ (CoreError::InvalidApiKey | CoreError::RateLimited)) => Err(e),
            // 6. Fall back to keyword matching
            Err(e) => {
                warn!(error = %e, "Chat API call failed, using symptom-based diagnosis");
                Ok(CropDiagnosis {
                    language,
                    diagnosis: select_by_keywords(&input.text, language),
                    source: DiagnosisSource::Fallback,
                    raw_response: FALLBACK_RAW_RESPONSE.to_string(),
                })
            }
        }
    }
}
