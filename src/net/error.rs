//! Request error taxonomy.

use std::time::Duration;

/// Failure of an outbound API call.
///
/// The API client never retries or swallows these; they reach the caller
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be constructed (body encoding, builder failure).
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// Non-success status surfaced by a typed wrapper.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    /// Browser-only call made outside the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
