//! Interpretation of raw backend responses.
//!
//! Transports (`gloo-net` in the browser, `reqwest` in the CLI) read the
//! status line and body text, then call into here so that every client maps
//! responses to outcomes identically.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde_json::Value;

use crate::error::ExchangeError;
use crate::types::{ApiErrorBody, ChatRequest, Customer};

/// JSON body for `POST /api/chat`.
#[must_use]
pub fn chat_request_body(message: &str) -> Value {
    serde_json::to_value(ChatRequest {
        message: message.to_owned(),
    })
    .unwrap_or(Value::Null)
}

/// Map a chat response to the bot reply text or the reason it failed.
///
/// The reply is returned verbatim; whitespace and newlines are preserved.
///
/// # Errors
///
/// - [`ExchangeError::Status`] for non-2xx statuses, carrying the body's
///   `error` string when one is present.
/// - [`ExchangeError::InvalidFormat`] when a 2xx body lacks a string `reply`.
/// - [`ExchangeError::Decode`] when a 2xx body is not JSON.
pub fn interpret_chat_response(status: u16, status_text: &str, body: &str) -> Result<String, ExchangeError> {
    if !is_success(status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error);
        return Err(ExchangeError::Status {
            status,
            status_text: status_text.to_owned(),
            message,
        });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| ExchangeError::Decode(e.to_string()))?;
    match value.get("reply") {
        Some(Value::String(reply)) => Ok(reply.clone()),
        _ => Err(ExchangeError::InvalidFormat),
    }
}

/// Map a customer-list response to a fresh snapshot.
///
/// # Errors
///
/// - [`ExchangeError::Status`] for non-2xx statuses (`Failed to fetch: ...`).
/// - [`ExchangeError::Decode`] when a 2xx body is not an array of customers.
pub fn interpret_customers_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Vec<Customer>, ExchangeError> {
    if !is_success(status) {
        return Err(ExchangeError::Status {
            status,
            status_text: status_text.to_owned(),
            message: Some(fetch_failed_message(status, status_text)),
        });
    }
    serde_json::from_str::<Vec<Customer>>(body).map_err(|e| ExchangeError::Decode(e.to_string()))
}

fn fetch_failed_message(status: u16, status_text: &str) -> String {
    format!("Failed to fetch: {status} {status_text}").trim_end().to_owned()
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
