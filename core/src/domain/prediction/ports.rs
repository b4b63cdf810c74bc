use std::future::Future;

use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Client for the external crop prediction service
#[cfg_attr(test, mockall::automock)]
pub trait PredictionClient: Send + Sync {
    fn predict(&self, payload: Value) -> impl Future<Output = Result<Value, CoreError>> + Send;
}

/// Service trait for crop prediction
pub trait PredictionService: Send + Sync {
    /// Forwards the measurement payload as-is and returns the service's answer as-is.
    fn predict_crop(&self, payload: Value)
    -> impl Future<Output = Result<Value, CoreError>> + Send;
}
