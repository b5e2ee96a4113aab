use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menubot_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error envelope for the diagnostic endpoints. The chat endpoint keeps its
/// own body shape and never surfaces this type.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    pub status: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ApiErrorBody {
            status: "error".to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::LlmNotConfigured => ApiError::ServiceUnavailable(
                "LLM client not initialized. Check logs for API key issue.".to_string(),
            ),
            CoreError::MenuUnavailable => {
                ApiError::InternalServerError("Menu data not loaded or empty.".to_string())
            }
            CoreError::ExternalServiceError(message) => ApiError::InternalServerError(message),
        }
    }
}
