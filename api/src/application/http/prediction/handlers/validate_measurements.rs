use axum::Json;
use krishiarogya_core::domain::prediction::entities::validate_measurements as validate_form;

use crate::application::http::{
    prediction::validators::{MeasurementForm, ValidateMeasurementsResponse},
    server::api_entities::{api_error::ApiError, response::Response},
};

#[utoipa::path(
    post,
    path = "/measurements/validate",
    tag = "prediction",
    summary = "Validate measurement form",
    description = "Checks every field is present, numeric and within its range. Values may be numbers or numeric strings.",
    request_body = MeasurementForm,
    responses(
        (status = 200, body = ValidateMeasurementsResponse)
    ),
)]
pub async fn validate_measurements(
    Json(MeasurementForm(form)): Json<MeasurementForm>,
) -> Result<Response<ValidateMeasurementsResponse>, ApiError> {
    let errors = validate_form(&form);

    Ok(Response::OK(ValidateMeasurementsResponse {
        valid: errors.is_empty(),
        errors,
    }))
}
