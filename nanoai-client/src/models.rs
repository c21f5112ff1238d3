use serde::Serialize;
use serde_json::Value;

/// Response body after content negotiation.
///
/// The fix API answers with JSON on the happy path but falls back to
/// plain text for proxy errors and some gateway failures, so both
/// shapes are first-class here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Body parsed from a response declaring `application/json`.
    Json(Value),
    /// Raw body of any other content type.
    Text(String),
}

impl Payload {
    /// The parsed JSON value, if this body was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// The raw text, if this body was not JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text),
        }
    }
}

/// Successful outcome of an API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// Always `true`; failures surface as [`ApiError`](crate::ApiError).
    pub success: bool,

    /// HTTP status returned by the server.
    pub status: u16,

    /// Negotiated response body.
    pub data: Payload,
}

/// Outcome of [`NanoAiClient::test_connection`](crate::NanoAiClient::test_connection).
///
/// This is a plain value in both directions: a failed probe reports
/// `connected: false` instead of propagating the underlying error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionStatus {
    pub connected: bool,

    /// Human-readable summary ("Connection successful" or the error text).
    pub message: String,

    /// Token info returned by the server when the probe succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,

    /// Payload captured from the failed probe, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Payload>,
}
