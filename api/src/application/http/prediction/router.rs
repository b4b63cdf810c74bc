use super::handlers::{
    get_measurement_fields::{__path_get_measurement_fields, get_measurement_fields},
    predict::{__path_predict, predict},
    validate_measurements::{__path_validate_measurements, validate_measurements},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict, get_measurement_fields, validate_measurements))]
pub struct PredictionApiDoc;

pub fn prediction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/predict", state.args.server.root_path),
            post(predict),
        )
        .route(
            &format!("{}/measurement-fields", state.args.server.root_path),
            get(get_measurement_fields),
        )
        .route(
            &format!("{}/measurements/validate", state.args.server.root_path),
            post(validate_measurements),
        )
}
