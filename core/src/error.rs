//! Error types for The One API client.
//!
//! # Design
//! Each variant names the stage that failed: the transport never produced a
//! response, the server answered with a non-success status, or the body did
//! not decode into the expected envelope. `NotFound` gets a dedicated variant
//! because callers frequently distinguish "no such id" from "the server
//! returned an unexpected status."

use thiserror::Error;

/// Errors returned by `Client` operations and `parse_page`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected envelope.
    #[error("deserialization failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration could not be assembled.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The HTTP status behind the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Config(_) => None,
        }
    }
}
