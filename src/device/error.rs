//! Errors surfaced by device fetches.

use std::time::Duration;
use thiserror::Error;

/// Coarse classification used by the render layer and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never got a response (refused, reset, timed out).
    NetworkFailure,
    /// The device answered with a non-2xx status.
    HttpStatusFailure,
    /// The device answered 2xx but the body was not the expected JSON.
    ParseFailure,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("HTTP error ({status}): {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) | FetchError::TimedOut(_) => FetchErrorKind::NetworkFailure,
            FetchError::HttpStatus { .. } => FetchErrorKind::HttpStatusFailure,
            FetchError::Parse(_) => FetchErrorKind::ParseFailure,
        }
    }
}
