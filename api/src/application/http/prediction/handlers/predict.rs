use axum::{Json, extract::State};
use krishiarogya_core::domain::prediction::{
    entities::{MeasurementInput, PredictionResult},
    ports::PredictionService,
};
use serde_json::Value;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    summary = "Recommend a crop",
    description = "Forwards soil and weather readings to the ML service and returns its answer unchanged",
    request_body = MeasurementInput,
    responses(
        (status = 200, body = PredictionResult),
        (status = 500, description = "ML service unreachable or failed", body = ApiErrorResponse)
    ),
)]
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response<Value>, ApiError> {
    let result = state
        .service
        .predict_crop(payload)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
