//! Environment driven configuration
//!
//! Read once at cold start. The table name and event bus are provisioned by
//! the surrounding Terraform module and surfaced here for the storage and
//! eventing steps that will replace the placeholder; nothing consumes them
//! yet.

use std::env;

use tracing::level_filters::LevelFilter;

/// Runtime configuration for the capture function.
#[derive(Debug, Clone)]
pub struct Config {
    /// `DYNAMODB_TABLE_NAME`, where leads will eventually be stored.
    pub table_name: Option<String>,
    /// `EVENT_BUS_NAME`, where lead-created events will eventually be emitted.
    pub event_bus: Option<String>,
    /// `ENVIRONMENT`, echoed back in `_meta.environment`.
    pub environment: String,
    /// `LOG_LEVEL`, applied to the tracing subscriber.
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::INFO);

        Config {
            table_name: lookup("DYNAMODB_TABLE_NAME"),
            event_bus: lookup("EVENT_BUS_NAME"),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
