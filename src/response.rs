//! Wire envelopes for the capture API
//!
//! Two shapes leave this function: a success receipt and an error envelope.
//! Field names and ordering are part of the public contract consumed by the
//! marketing site, so serialization here is covered by exact JSON assertions.

use http::header::CONTENT_TYPE;
use lambda_http::{Body, Error, Response};
use serde::Serialize;

use crate::error::{CaptureError, ErrorCode, FieldError};

/// Canned message returned with every accepted submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your submission";

const X_REQUEST_ID: &str = "x-request-id";

/// Success receipt for an accepted lead.
#[derive(Serialize, Debug, Clone)]
pub struct CaptureReceipt {
    pub success: bool,
    #[serde(rename = "leadId")]
    pub lead_id: String,
    pub message: String,
    #[serde(rename = "_meta")]
    pub meta: ReceiptMeta,
}

/// Diagnostic block echoed alongside the receipt.
#[derive(Serialize, Debug, Clone)]
pub struct ReceiptMeta {
    pub environment: String,
    pub timestamp: String,
    /// Stays `true` until the real capture pipeline replaces this stub.
    pub placeholder: bool,
}

impl CaptureReceipt {
    pub fn new(lead_id: String, environment: String, timestamp: String) -> Self {
        CaptureReceipt {
            success: true,
            lead_id,
            message: THANK_YOU_MESSAGE.to_string(),
            meta: ReceiptMeta {
                environment,
                timestamp,
                placeholder: true,
            },
        }
    }

    /// Render the receipt as a `200 OK` Lambda response.
    ///
    /// `request_id` lands in the `X-Request-Id` header so a submission can be
    /// correlated with the CloudWatch invocation that produced it.
    pub fn into_response(self, request_id: &str) -> Result<Response<Body>, Error> {
        let body = serde_json::to_string(&self)?;
        let response = Response::builder()
            .status(200)
            .header(CONTENT_TYPE, "application/json")
            .header(X_REQUEST_ID, request_id)
            .body(Body::from(body))
            .map_err(Box::new)?;
        Ok(response)
    }
}

/// Standardized error envelope.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ErrorEnvelope {
            success: false,
            error: ErrorBody {
                code,
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.error.details = Some(details);
        self
    }

    /// Render the envelope with the status its code maps to.
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let body = serde_json::to_string(&self)?;
        let response = Response::builder()
            .status(self.error.code.status())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(Box::new)?;
        Ok(response)
    }
}

impl From<&CaptureError> for ErrorEnvelope {
    fn from(err: &CaptureError) -> Self {
        let envelope = ErrorEnvelope::new(err.code(), err.to_string());
        match err.details() {
            Some(details) => envelope.with_details(details),
            None => envelope,
        }
    }
}
