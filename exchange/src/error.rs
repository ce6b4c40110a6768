//! Failure taxonomy for a single request against the backend.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable by the user trying again. `Display` output is
//! shown to the user verbatim (the chat log prefixes it with `Error: `), so
//! messages are phrased for people, not for logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Reason a request did not yield the expected payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status. `message` comes from the structured error body when present.
    #[error("{}", status_message(*status, status_text, message.as_deref()))]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
    /// 2xx response without a string `reply` field.
    #[error("Invalid response format received from the server (expected 'reply' field).")]
    InvalidFormat,
    /// 2xx response whose body is not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
    /// No response within the configured bound.
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },
    /// Issued from a context with no HTTP transport (server-side rendering).
    #[error("Not available during server rendering")]
    Unavailable,
}

impl ExchangeError {
    /// Build a [`ExchangeError::Status`] without a structured message.
    #[must_use]
    pub fn status(status: u16, status_text: &str) -> Self {
        Self::Status {
            status,
            status_text: status_text.to_owned(),
            message: None,
        }
    }
}

fn status_message(status: u16, status_text: &str, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.to_owned(),
        _ => format!("API Error: {status} {status_text}").trim_end().to_owned(),
    }
}
