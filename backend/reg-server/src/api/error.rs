//! REST API error types
//!
//! Every failure leaves as `{"success": false, "error": {code, message, field?}}`
//! with a status matching the failure class.

use reg_auth::RegistrationError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const MISSING_FIELD_MESSAGE: &str = "Username and password are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const WEAK_PASSWORD_MESSAGE: &str =
    "Password must be at least 6 characters and contain at least 1 number and 1 special character";
pub const USER_EXISTS_MESSAGE: &str = "User with this email already exists";
pub const INTERNAL_ERROR_MESSAGE: &str = "Server error during registration";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_EMAIL", "USER_EXISTS")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input (400)
    #[error("Validation failed [{code}]: {message} {location}")]
    Validation {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Identity already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Body could not be read (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Internal causes are logged by the workflow; this is the response side.
        log::debug!("{}", self);

        let (status, body) = match self {
            ApiError::Validation {
                code,
                message,
                field,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "USER_EXISTS".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                error: body,
            }),
        )
            .into_response()
    }
}

/// Convert registration failures to API errors
impl From<RegistrationError> for ApiError {
    #[track_caller]
    fn from(e: RegistrationError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            RegistrationError::MissingField { field, .. } => ApiError::Validation {
                code: "MISSING_FIELD",
                message: MISSING_FIELD_MESSAGE.to_string(),
                field: Some(field.to_string()),
                location,
            },
            RegistrationError::InvalidIdentity { .. } => ApiError::Validation {
                code: "INVALID_EMAIL",
                message: INVALID_EMAIL_MESSAGE.to_string(),
                field: Some("username".to_string()),
                location,
            },
            RegistrationError::WeakCredential { .. } => ApiError::Validation {
                code: "WEAK_PASSWORD",
                message: WEAK_PASSWORD_MESSAGE.to_string(),
                field: Some("password".to_string()),
                location,
            },
            RegistrationError::DuplicateIdentity { .. } => ApiError::Conflict {
                message: USER_EXISTS_MESSAGE.to_string(),
                location,
            },
            // Don't expose store or hashing details to clients
            _ => ApiError::Internal {
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
