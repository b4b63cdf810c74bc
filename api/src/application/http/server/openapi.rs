use crate::application::http::{
    crop_doctor::router::CropDoctorApiDoc, health::HealthApiDoc,
    prediction::router::PredictionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KrishiArogya API",
        description = "Crop recommendation proxy and crop disease diagnosis"
    ),
    tags(
        (name = "prediction", description = "Crop recommendation from soil and weather readings"),
        (name = "crop-doctor", description = "Crop disease diagnosis"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(PredictionApiDoc::openapi());
        openapi.merge(CropDoctorApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
