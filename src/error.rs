//! API error type.
//!
//! Every failure leaves the service as a JSON body:
//! `{"success": false, "error": .., "code": .., "details"?: [..], "path"?: ..}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::{FieldError, ValidationFailure};

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload was JSON but failed schema checks.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// Body could not be read or is not JSON.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Body exceeded the configured limit.
    #[error("request body too large")]
    PayloadTooLarge,

    /// Handling exceeded the configured request timeout.
    #[error("request timed out")]
    Timeout,

    #[error("endpoint not found: {path}")]
    NotFound { path: String },

    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Unexpected fault inside the service.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::MalformedBody(_) => "MALFORMED_BODY",
            ApiError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ApiError::Timeout => "REQUEST_TIMEOUT",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn body(&self) -> ErrorBody<'_> {
        let (error, details, path) = match self {
            ApiError::Validation(failure) => {
                ("Validation failed".to_string(), Some(failure.errors()), None)
            }
            ApiError::NotFound { path } => ("Endpoint not found".to_string(), None, Some(path.as_str())),
            ApiError::MethodNotAllowed { path, .. } => (self.to_string(), None, Some(path.as_str())),
            // Internal details stay in the logs.
            ApiError::Internal(_) => ("Internal server error".to_string(), None, None),
            _ => (self.to_string(), None, None),
        };

        ErrorBody {
            success: false,
            error,
            code: self.code(),
            details,
            path,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("serialization failed: {}", e))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldError]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
