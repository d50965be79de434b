//! API Response Envelope
//!
//! Every JSON response from the remote API is wrapped in the same
//! envelope: `{success, statusCode, data, message?}`. Error bodies may
//! carry `message` as either a single string or an array of strings
//! (typical for per-field validation output), so extraction has to
//! accept both shapes.

use serde::Deserialize;

use crate::error::app_error::GENERIC_ERROR_MESSAGE;

/// Standard response envelope of the remote API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub status_code: u16,
    pub data: T,
    #[serde(default)]
    pub message: Option<ApiMessage>,
}

impl<T> ApiEnvelope<T> {
    /// The envelope message flattened to display text, if present
    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().map(ApiMessage::to_text)
    }
}

/// A server-provided message: a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiMessage {
    /// Flatten to display text; arrays are joined line by line
    pub fn to_text(&self) -> String {
        match self {
            ApiMessage::One(msg) => msg.clone(),
            ApiMessage::Many(msgs) => msgs.join("\n"),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            ApiMessage::One(msg) => msg.is_empty(),
            ApiMessage::Many(msgs) => msgs.iter().all(String::is_empty),
        }
    }
}

/// Error body shape of the remote API.
///
/// Rejections usually carry `message`, but some middleware layers emit
/// `error` instead, so both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<ApiMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract the human-readable rejection message.
    ///
    /// Preference order: `message` (string or joined array), then
    /// `error`, then the generic fallback.
    pub fn extract_message(&self) -> String {
        if let Some(message) = &self.message {
            if !message.is_empty() {
                return message.to_text();
            }
        }
        match &self.error {
            Some(error) if !error.is_empty() => error.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Parse an error body from raw response bytes, tolerating
    /// non-JSON bodies (proxies, plain-text 502 pages, ...)
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}
