//! Placeholder Lambda function for capturing marketing leads.
//!
//! Accepts a JSON payload on `POST /lead`, fabricates a lead identifier and
//! returns a canned success response. Validation, deduplication, rate
//! limiting, persistence and event emission are intentionally not implemented
//! yet; see [`handler::capture_lead`] for the full request/response contract.

pub mod config;
pub mod error;
pub mod handler;
pub mod lead;
pub mod response;
