use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use krishiarogya_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{message}")]
    InternalServerError {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingDescription => ApiError::BadRequest(error.to_string()),
            CoreError::InvalidApiKey => ApiError::Unauthorized(error.to_string()),
            CoreError::RateLimited => ApiError::TooManyRequests(error.to_string()),
            CoreError::MlServiceError(_) => ApiError::InternalServerError {
                message: error.to_string(),
                details: None,
            },
            CoreError::ExternalServiceError(details) | CoreError::InvalidConfiguration(details) => {
                ApiError::InternalServerError {
                    message: "Failed to process request".to_string(),
                    details: Some(details),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InternalServerError { message, details } => ApiErrorResponse {
                error: message,
                details,
            },
            other => ApiErrorResponse {
                error: other.to_string(),
                details: None,
            },
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %body.error, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %body.error, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_statuses() {
        let cases = [
            (CoreError::MissingDescription, StatusCode::BAD_REQUEST),
            (CoreError::InvalidApiKey, StatusCode::UNAUTHORIZED),
            (CoreError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (
                CoreError::MlServiceError("refused".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::ExternalServiceError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_ml_service_error_hides_details() {
        let error = ApiError::from(CoreError::MlServiceError("connection refused".to_string()));
        match error {
            ApiError::InternalServerError { message, details } => {
                assert_eq!(message, "Error communicating with ML service");
                assert_eq!(details, None);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_error_keeps_raw_message() {
        let error = ApiError::from(CoreError::ExternalServiceError("socket closed".to_string()));
        match error {
            ApiError::InternalServerError { details, .. } => {
                assert_eq!(details.as_deref(), Some("socket closed"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
