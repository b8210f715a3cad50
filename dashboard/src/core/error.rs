//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! ## Error Categories
//!
//! - **Api**: Any backend failure, normalized into a single [`RequestError`]
//!   (transport error, non-success HTTP status, or `success: false` in the body)
//! - **Validation**: Form input rejected before any network call
//! - **State**: The requested action does not fit the current state
//!   (e.g. cancelling with no active trade)
//! - **Session**: The persisted session file could not be read or written
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::core::error::AppError;
//!
//! fn validate_amount(amount: f64) -> Result<f64, AppError> {
//!     if amount <= 0.0 {
//!         return Err(AppError::Validation("Amount must be greater than 0".to_string()));
//!     }
//!     Ok(amount)
//! }
//! ```

use thiserror::Error;

/// Uniform failure shape for every backend call.
///
/// The message is the backend's `error` text when it sent one, otherwise
/// [`RequestError::DEFAULT_MESSAGE`]. Callers never need to know whether the
/// network or the backend failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
}

impl RequestError {
    pub const DEFAULT_MESSAGE: &'static str = "Request failed";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Error built from an optional backend message, falling back to the default.
    pub fn from_backend(message: Option<&str>, status: Option<u16>) -> Self {
        Self {
            message: message
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(Self::DEFAULT_MESSAGE)
                .to_string(),
            status,
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] RequestError),

    /// Input validation error. Raised before any network call; no state changes.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Action rejected by the current application state.
    #[error("State error: {0}")]
    State(String),

    /// Session persistence error.
    #[error("Session error: {0}")]
    Session(#[from] crate::services::session::SessionError),
}

impl AppError {
    /// Text suitable for the status line, without the category prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(err) => err.message.clone(),
            AppError::Validation(msg) | AppError::State(msg) => msg.clone(),
            AppError::Session(err) => err.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<crate::utils::validation::ValidationResult> for AppError {
    fn from(result: crate::utils::validation::ValidationResult) -> Self {
        AppError::Validation(result.error.unwrap_or_else(|| "Invalid input".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_falls_back_to_default_message() {
        assert_eq!(RequestError::from_backend(None, Some(500)).message, "Request failed");
        assert_eq!(RequestError::from_backend(Some("  "), None).message, "Request failed");
        assert_eq!(
            RequestError::from_backend(Some("Invalid offer_sequence"), Some(400)).message,
            "Invalid offer_sequence"
        );
    }

    #[test]
    fn test_user_message_strips_category() {
        let err = AppError::from(RequestError::new("Wallet not found"));
        assert_eq!(err.to_string(), "API error: Wallet not found");
        assert_eq!(err.user_message(), "Wallet not found");

        let err = AppError::Validation("Amount is required".to_string());
        assert_eq!(err.user_message(), "Amount is required");
    }
}
