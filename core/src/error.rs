//! Error types for the retrieval service client.
//!
//! # Design
//! Transport failures (DNS, refused connection, body read) keep the
//! underlying `reqwest::Error` as their source and display its message
//! unchanged. Non-ok HTTP responses are normalized into `Status`, whose
//! display joins status code, status text, and best-effort body with
//! single spaces.

use std::fmt;

/// Errors returned by `RagClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The network call itself failed, or the response body could not be
    /// read on the success path.
    Transport(reqwest::Error),

    /// The server responded with a non-2xx/3xx status. `reason` is the
    /// canonical status text (empty for codes without one); `body` is the
    /// response body, empty if it could not be read.
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "{e}"),
            ApiError::Status {
                status,
                reason,
                body,
            } => {
                write!(f, "{status} {reason} {body}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}
