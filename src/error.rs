//! Error taxonomy for the capture API
//!
//! The wire contract distinguishes machine readable codes from human readable
//! messages. `VALIDATION_ERROR` and the per-field details are part of the
//! contract even though the placeholder never produces them.

use http::StatusCode;
use serde::Serialize;

/// Machine readable error codes returned in the error envelope.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidJson,
    ValidationError,
    InternalError,
}

impl ErrorCode {
    /// HTTP status the code maps to.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidJson | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single field level problem, carried in `error.details`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failures the capture handler reports to the caller.
#[derive(thiserror::Error, Debug)]
pub enum CaptureError {
    /// The request body was present but not parseable as JSON.
    #[error("Request body must be valid JSON")]
    InvalidJson(#[source] serde_json::Error),
    /// Reserved for the future validation step.
    #[error("Lead submission failed validation")]
    Validation(Vec<FieldError>),
    /// Anything unexpected on the handler path.
    #[error("Internal error")]
    Internal,
}

impl CaptureError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CaptureError::InvalidJson(_) => ErrorCode::InvalidJson,
            CaptureError::Validation(_) => ErrorCode::ValidationError,
            CaptureError::Internal => ErrorCode::InternalError,
        }
    }

    /// Field details for the envelope, when the variant carries any.
    pub fn details(&self) -> Option<Vec<FieldError>> {
        match self {
            CaptureError::Validation(details) => Some(details.clone()),
            _ => None,
        }
    }
}
