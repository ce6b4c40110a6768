//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ExchangeError::Unavailable`] since
//! these requests are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into visible view state. Failures are also traced to the browser console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use exchange::{Customer, DEFAULT_API_BASE, ExchangeError};

/// Upper bound on a single chat exchange before the gate is released.
pub const CHAT_TIMEOUT_SECS: u64 = 60;

/// Backend base URL, overridable at build time with `BAKE_ASSIST_API_URL`.
pub fn api_base() -> &'static str {
    match option_env!("BAKE_ASSIST_API_URL") {
        Some(base) if !base.trim().is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn customers_endpoint() -> String {
    exchange::customers_url(api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(customer_id: &str) -> String {
    exchange::chat_url(api_base(), customer_id)
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> ExchangeError {
    ExchangeError::Transport(err.to_string())
}

/// Fetch the full customer list from `GET /api/customers`.
///
/// # Errors
///
/// Returns an [`ExchangeError`] for transport failures, non-2xx statuses and
/// undecodable bodies.
pub async fn fetch_customers() -> Result<Vec<Customer>, ExchangeError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::get(&customers_endpoint())
                .send()
                .await
                .map_err(transport_error)?;
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.text().await.map_err(transport_error)?;
            exchange::interpret_customers_response(status, &status_text, &body)
        }
        .await;
        if let Err(e) = &result {
            log::error!("failed to fetch customers: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ExchangeError::Unavailable)
    }
}

/// Send one chat message via `POST /api/chat?customer_number=<id>`.
///
/// The request is raced against a [`CHAT_TIMEOUT_SECS`] timer so a hung
/// backend cannot hold the chat view's in-flight gate forever.
///
/// # Errors
///
/// Returns an [`ExchangeError`] for transport failures, non-2xx statuses,
/// replies without a string `reply` field and timeouts.
pub async fn send_chat_message(customer_id: &str, message: &str) -> Result<String, ExchangeError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let request = Box::pin(post_chat(customer_id, message));
        let timer = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_secs(
            CHAT_TIMEOUT_SECS,
        )));
        let result = match select(request, timer).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => Err(ExchangeError::Timeout {
                secs: CHAT_TIMEOUT_SECS,
            }),
        };
        if let Err(e) = &result {
            log::error!("failed to send message or get response: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (customer_id, message);
        Err(ExchangeError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_chat(customer_id: &str, message: &str) -> Result<String, ExchangeError> {
    let resp = gloo_net::http::Request::post(&chat_endpoint(customer_id))
        .json(&exchange::chat_request_body(message))
        .map_err(transport_error)?
        .send()
        .await
        .map_err(transport_error)?;
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.map_err(transport_error)?;
    exchange::interpret_chat_response(status, &status_text, &body)
}
