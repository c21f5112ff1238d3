use serde_json::json;
use thiserror::Error;

use crate::models::Payload;

/// Errors produced by the fix-API client.
///
/// Exactly two kinds exist: the server answered with a non-success
/// status (`Request`), or no usable response was received at all
/// (`Network`). A `Request` error is never re-wrapped as `Network`;
/// the variants keep the two failure modes structurally apart.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server responded with a status outside 200-299.
    #[error("HTTP {status}: {status_text}")]
    Request {
        status: u16,
        status_text: String,
        /// Body the server returned alongside the failure status.
        data: Payload,
    },

    /// The server was never reached, or its response could not be read.
    #[error("Network error: {message}")]
    Network { message: String },
}

impl ApiError {
    pub(crate) fn network(source: impl std::fmt::Display) -> Self {
        ApiError::Network {
            message: source.to_string(),
        }
    }

    /// HTTP status associated with the failure; 0 means the transport
    /// failed before any response arrived.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Request { status, .. } => *status,
            ApiError::Network { .. } => 0,
        }
    }

    /// Payload captured at failure time.
    ///
    /// For `Request` this is the server's own body; for `Network` it
    /// wraps the underlying transport failure's message.
    pub fn data(&self) -> Payload {
        match self {
            ApiError::Request { data, .. } => data.clone(),
            ApiError::Network { message } => Payload::Json(json!({ "error": message })),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
