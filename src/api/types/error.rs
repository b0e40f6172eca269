//! HTTP error responses
//!
//! Two response shapes share one `ApiError`: field-level validation
//! failures carry the full per-field report, everything else carries a
//! single message with an error type tag.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::forms::{report::ErrorReport, FormError};
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    NotFoundError,
    ConflictError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Single-message error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// Field-level validation response; keys are field names
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: ErrorReport,
}

/// Response body for any error status
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Message(ApiErrorResponse),
    Fields(ValidationErrorResponse),
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody::Message(ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                },
            }),
        }
    }

    /// Unprocessable-entity response carrying the per-field report
    pub fn validation(report: ErrorReport) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: ApiErrorBody::Fields(ValidationErrorResponse { errors: report }),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiErrorType::AuthenticationError,
            message,
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Internal { message } => Self::internal(message),
            DomainError::Storage { message } => Self::internal(message),
        }
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(report) => Self::validation(report),
            FormError::Storage(err) => err.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ApiErrorBody::Message(response) => write!(
                f,
                "{}: {}",
                response.error.error_type, response.error.message
            ),
            ApiErrorBody::Fields(response) => {
                write!(f, "validation failed for {} field(s)", response.errors.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid phone");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        match &err.body {
            ApiErrorBody::Message(response) => {
                assert_eq!(response.error.error_type, ApiErrorType::InvalidRequestError);
                assert_eq!(response.error.message, "Invalid phone");
            }
            other => panic!("expected message body, got {other:?}"),
        }
    }

    #[test]
    fn test_domain_error_conversion() {
        let api_err: ApiError = DomainError::not_found("User not found").into();
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);

        let api_err: ApiError = DomainError::conflict("SKU taken").into();
        assert_eq!(api_err.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_form_error_conversion_keeps_field_report() {
        let mut report = ErrorReport::new();
        report.add("phone_number", "The phone number must have 9 digits");

        let api_err: ApiError = FormError::Invalid(report).into();
        assert_eq!(api_err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let json = serde_json::to_string(&api_err.body).unwrap();
        assert!(json.contains("\"phone_number\""));
        assert!(json.contains("9 digits"));
    }

    #[test]
    fn test_message_serialization() {
        let err = ApiError::unauthorized("Invalid username or password");
        let json = serde_json::to_string(&err.body).unwrap();

        assert!(json.contains("authentication_error"));
        assert!(json.contains("Invalid username or password"));
    }
}
