//! Error types for trace fetching.

use thiserror::Error;

/// Errors that can occur while fetching traces.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// Transport-level failure, passed through from the HTTP client.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// Body was neither an array of traces nor `{ "traces": [...] }`.
    #[error("invalid traces payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            FetchError::Network(e) => e.status().map(|s| s.as_u16()),
            FetchError::Decode(_) => None,
        }
    }
}
