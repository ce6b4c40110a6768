//! URL builders for the two backend endpoints.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Address of the backend when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Trim whitespace and trailing slashes so paths can be appended directly.
#[must_use]
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_owned()
}

/// `GET` endpoint listing all customers.
#[must_use]
pub fn customers_url(base: &str) -> String {
    format!("{}/api/customers", normalize_base(base))
}

/// `POST` endpoint for one chat exchange; the identifier is percent-encoded.
#[must_use]
pub fn chat_url(base: &str, customer_id: &str) -> String {
    format!(
        "{}/api/chat?customer_number={}",
        normalize_base(base),
        urlencoding::encode(customer_id)
    )
}
