//! Response envelope shared by every backend endpoint.

use serde::{Deserialize, Serialize};

/// `{ "success": bool, "data": T?, "error": string? }`
///
/// A successful response carries `data`; a failed one carries `error`.
/// Both fields are optional on the wire so that a malformed or empty body
/// still deserializes and can be reported uniformly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// The backend's error text, if it sent a non-blank one.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}
