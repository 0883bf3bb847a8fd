//! Lambda entry point for `POST /lead`
//!
//! This is a placeholder: it checks that the body is valid JSON, fabricates a
//! lead id and answers with a canned receipt. The real implementation will
//! validate input, dedupe by email, rate limit by IP, store the lead in
//! DynamoDB and emit an event to EventBridge; none of that happens here.

use chrono::{SecondsFormat, Utc};
use lambda_http::{Body, Context, Error, Request, Response};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::CaptureError;
use crate::lead::LeadSubmission;
use crate::response::{CaptureReceipt, ErrorEnvelope};

/// Handle a single lead capture invocation.
pub async fn capture_lead(event: Request, config: &Config) -> Result<Response<Body>, Error> {
    info!(
        method = %event.method(),
        path = %event.uri().path(),
        "received lead capture request"
    );

    let body = match parse_body(event.body()) {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "rejecting request");
            return ErrorEnvelope::from(&err).into_response();
        }
    };

    let lead_id = Uuid::new_v4().to_string();
    // Six fractional digits even at whole seconds; consumers only rely on
    // RFC 3339 UTC.
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let submission = LeadSubmission::from_value(&body);
    if !submission.is_empty() {
        debug!(
            has_email = submission.email.is_some(),
            utm_source = submission.utm_source.as_deref().unwrap_or_default(),
            "parsed lead submission"
        );
    }

    info!(%lead_id, environment = %config.environment, "created lead");

    // Requests parsed outside the runtime carry no context extension at all;
    // fall back to the lead id so the header is always present.
    let context = event
        .extensions()
        .get::<Context>()
        .cloned()
        .unwrap_or_default();
    let request_id = if context.request_id.is_empty() {
        lead_id.clone()
    } else {
        context.request_id
    };

    let receipt = CaptureReceipt::new(lead_id, config.environment.clone(), timestamp);
    receipt.into_response(&request_id)
}

/// Extract the request body as a JSON value.
///
/// A missing or empty body is treated as an empty object; anything else must
/// parse as JSON. Binary bodies have already been base64-decoded by the
/// runtime adapter.
fn parse_body(body: &Body) -> Result<serde_json::Value, CaptureError> {
    let raw = match body {
        Body::Empty => &[][..],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    };
    if raw.is_empty() {
        return Ok(serde_json::Value::Object(Default::default()));
    }
    serde_json::from_slice(raw).map_err(CaptureError::InvalidJson)
}
