//! Structured logging utilities.
//!
//! Log lines use the `EVENT_NAME key=value` style, prefixed by a
//! [`LogContext`].

use std::fmt;

/// Request id used when a caller validates without its own context.
pub const DETACHED_REQUEST_ID: &str = "local";

/// Logging context for one validation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub request_id: String,
    pub schema: Option<String>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            schema: None,
        }
    }

    /// Context for calls made outside any request.
    pub fn detached() -> Self {
        Self::new(DETACHED_REQUEST_ID)
    }

    pub fn with_schema(&self, schema: &str) -> Self {
        Self {
            request_id: self.request_id.clone(),
            schema: Some(schema.to_string()),
        }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "[req={}] [schema={}]", self.request_id, schema),
            None => write!(f, "[req={}]", self.request_id),
        }
    }
}

/// Initialize the `env_logger` backend.
///
/// Safe to call repeatedly; only the first call installs the logger.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
