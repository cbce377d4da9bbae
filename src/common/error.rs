// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{ValidationError, ValidationErrorKind};
use crate::rules::RegistryError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(ValidationError),
    Configuration(RegistryError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Validation(e) => write!(f, "Validation Error: {}", e),
            ApiError::Configuration(e) => write!(f, "Configuration Error: {}", e),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ValidationErrorKind>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, field, reason) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", None, None),
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                e.message,
                "VALIDATION_ERROR",
                Some(e.field),
                Some(e.kind),
            ),
            ApiError::Configuration(e) => {
                error!(error = %e, "Validation rules are misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Validation is not available".to_string(),
                    "INTERNAL_SERVER_ERROR",
                    None,
                    None,
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            field,
            reason,
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error)
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        ApiError::Configuration(error)
    }
}
