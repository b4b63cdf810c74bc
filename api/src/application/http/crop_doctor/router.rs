use super::handlers::diagnose_crop::{__path_diagnose_crop, diagnose_crop};
use super::validators::MAX_REQUEST_BODY;
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(diagnose_crop))]
pub struct CropDoctorApiDoc;

pub fn crop_doctor_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/crop-doctor", state.args.server.root_path),
            post(diagnose_crop),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
}
