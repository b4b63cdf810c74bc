use krishiarogya_core::domain::crop_doctor::{
    entities::{CropDiagnosis, DiagnosisRecord, DiagnosisSource, Language},
    value_objects::{ImageAttachment, ImageMime, MAX_IMAGE_SIZE},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Room for the text field and multipart framing on top of the image.
pub const MAX_REQUEST_BODY: usize = MAX_IMAGE_SIZE + 1024 * 1024;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropDoctorResponse {
    pub success: bool,
    pub language: Language,
    pub diagnosis: DiagnosisRecord,
    pub source: DiagnosisSource,
    pub raw_response: String,
}

impl From<CropDiagnosis> for CropDoctorResponse {
    fn from(result: CropDiagnosis) -> Self {
        Self {
            success: true,
            language: result.language,
            diagnosis: result.diagnosis,
            source: result.source,
            raw_response: result.raw_response,
        }
    }
}

/// Multipart form accepted by `POST /crop-doctor`, for the API docs.
#[derive(Debug, ToSchema)]
pub struct CropDoctorForm {
    /// Description of the symptoms, in English or Hindi
    pub text: Option<String>,
    /// JPEG, PNG or WEBP photo, up to 10MB
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Checks an uploaded image part. `Ok(None)` means the part was empty and
/// should be treated as absent.
pub fn validate_image(
    file_name: Option<&str>,
    content_type: Option<&str>,
    size_bytes: usize,
) -> Result<Option<ImageAttachment>, ApiError> {
    if size_bytes == 0 {
        return Ok(None);
    }

    let mime = content_type
        .and_then(ImageMime::from_content_type)
        .ok_or_else(|| {
            ApiError::BadRequest("Only JPEG, PNG and WEBP images are allowed".to_string())
        })?;

    if size_bytes > MAX_IMAGE_SIZE {
        return Err(ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(Some(ImageAttachment {
        file_name: file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("image")
            .to_string(),
        mime,
        size_bytes,
    }))
}
