//! Error responses shared by every HTTP module.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::member::MemberError;
use crate::domain::membership::MembershipError;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error wrapper that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError(pub MemberError);

impl From<MemberError> for ApiError {
    fn from(err: MemberError) -> Self {
        Self(err)
    }
}

impl From<MembershipError> for ApiError {
    fn from(err: MembershipError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(MemberError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            MemberError::NotFound(_) => (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND"),
            MemberError::DuplicateEmail(_) => (StatusCode::CONFLICT, "DUPLICATE_MEMBER"),
            MemberError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            MemberError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            MemberError::InvalidPackage(_) => (StatusCode::BAD_REQUEST, "INVALID_PACKAGE"),
            MemberError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = match &self.0 {
            MemberError::ValidationFailed { field, .. }
            | MemberError::InvalidDate { field, .. } => ErrorResponse::with_details(
                error_code,
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            MemberError::Infrastructure(cause) => {
                tracing::error!(error = %cause, "request failed");
                ErrorResponse::new(error_code, "An internal error occurred")
            }
            _ => ErrorResponse::new(error_code, self.0.message()),
        };

        (status, Json(body)).into_response()
    }
}
