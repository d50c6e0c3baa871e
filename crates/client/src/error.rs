//! Client errors.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
///
/// Callers never branch on the variant to pick a notification: every failure
/// is reported the same way. The variants exist for logging.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("amount is not a number: {0:?}")]
    InvalidAmount(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Extract a readable message from an error response body.
///
/// The backend answers failures with `{"error": "..."}`; anything else is
/// passed through as plain text.
pub(crate) fn error_body_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }

    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .or_else(|| json.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
