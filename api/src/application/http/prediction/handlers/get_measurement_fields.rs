use krishiarogya_core::domain::prediction::entities::measurement_field_specs;

use crate::application::http::{
    prediction::validators::MeasurementFieldsResponse,
    server::api_entities::{api_error::ApiError, response::Response},
};

#[utoipa::path(
    get,
    path = "/measurement-fields",
    tag = "prediction",
    summary = "List measurement fields",
    description = "Keys, labels, units and inclusive ranges of the prediction form fields",
    responses(
        (status = 200, body = MeasurementFieldsResponse)
    ),
)]
pub async fn get_measurement_fields() -> Result<Response<MeasurementFieldsResponse>, ApiError> {
    Ok(Response::OK(MeasurementFieldsResponse {
        data: measurement_field_specs(),
    }))
}
