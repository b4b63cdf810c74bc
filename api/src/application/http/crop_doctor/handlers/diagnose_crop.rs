use axum::extract::{Multipart, State, multipart::MultipartError};
use axum::http::StatusCode;
use krishiarogya_core::domain::crop_doctor::{
    ports::CropDoctorService,
    value_objects::{DiagnoseCropInput, ImageAttachment},
};
use tracing::warn;

use crate::application::http::{
    crop_doctor::validators::{CropDoctorForm, CropDoctorResponse, validate_image},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    warn!("Failed to read multipart {}: {}", context, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge("Upload too large. Max image size is 10MB".to_string())
    } else {
        ApiError::BadRequest(format!("Failed to read {}: {}", context, e.body_text()))
    }
}

#[utoipa::path(
    post,
    path = "/crop-doctor",
    tag = "crop-doctor",
    summary = "Diagnose a crop problem",
    description = "Diagnoses a crop disease from a text description (English or Hindi) and an optional photo. \
        Falls back to keyword matching when the AI service is unavailable.",
    request_body(content = CropDoctorForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = CropDoctorResponse),
        (status = 400, description = "Missing description or unsupported image type", body = ApiErrorResponse),
        (status = 401, description = "Chat API key rejected", body = ApiErrorResponse),
        (status = 413, description = "Image larger than 10MB", body = ApiErrorResponse),
        (status = 429, description = "Chat API rate limit reached", body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn diagnose_crop(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<CropDoctorResponse>, ApiError> {
    let mut text = String::new();
    let mut image: Option<ImageAttachment> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("multipart field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "text" => {
                text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("text", e))?;
            }
            "image" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let content_type = field.content_type().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("image", e))?;

                image = validate_image(file_name.as_deref(), content_type.as_deref(), data.len())?;
            }
            _ => {}
        }
    }

    let result = state
        .service
        .diagnose_crop(DiagnoseCropInput { text, image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CropDoctorResponse::from(result)))
}
