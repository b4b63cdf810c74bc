use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crop_doctor::ports::ChatClient,
    prediction::ports::{PredictionClient, PredictionService},
};

impl<CC, PC> PredictionService for Service<CC, PC>
where
    CC: ChatClient,
    PC: PredictionClient,
{
    async fn predict_crop(&self, payload: Value) -> Result<Value, CoreError> {
        self.prediction_client.predict(payload).await.map_err(|e| {
            tracing::error!(error = %e, "Prediction request failed");
            match e {
                CoreError::MlServiceError(_) => e,
                other => CoreError::MlServiceError(other.to_string()),
            }
        })
    }
}
