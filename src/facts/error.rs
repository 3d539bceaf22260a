//! Error types for fact lookups.

use thiserror::Error;

/// Errors that can occur while looking up a fact.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Failed to reach the fact service or read its response
    #[error("Fact request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Fact request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Service answered with a non-success status
    #[error("Fact service returned status {status}")]
    Status { status: u16 },

    /// Service answered with nothing usable
    #[error("Fact service returned an empty body")]
    EmptyBody,

    /// Failure injected by a test double
    #[error("Stub lookup failed: {0}")]
    Stub(String),
}

impl LookupError {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Request { .. } => "request",
            LookupError::Timeout { .. } => "timeout",
            LookupError::Status { .. } => "status",
            LookupError::EmptyBody => "empty_body",
            LookupError::Stub(_) => "stub",
        }
    }
}
