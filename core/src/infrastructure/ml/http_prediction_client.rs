use reqwest::Client;
use serde_json::Value;

use crate::domain::{common::entities::app_errors::CoreError, prediction::ports::PredictionClient};

/// Forwards measurement payloads to the ML service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    predict_url: String,
    client: Client,
}

impl HttpPredictionClient {
    pub fn new(predict_url: String) -> Self {
        Self {
            predict_url,
            client: Client::new(),
        }
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, payload: Value) -> Result<Value, CoreError> {
        let response = self
            .client
            .post(&self.predict_url)
            .json(&payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::error!("ML service request failed: {}", e);
                CoreError::MlServiceError(e.to_string())
            })?;

        response.json::<Value>().await.map_err(|e| {
            tracing::error!("Failed to parse ML service response: {}", e);
            CoreError::MlServiceError(e.to_string())
        })
    }
}
