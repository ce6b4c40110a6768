//! Backend API client over `reqwest`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use exchange::{Customer, ExchangeError};

const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, Duration::from_secs(timeout_secs))
    }

    fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()?;
        Ok(Self {
            http,
            base_url: exchange::normalize_base(base_url),
            timeout_secs: timeout.as_secs().max(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/customers`.
    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, ExchangeError> {
        let url = exchange::customers_url(&self.base_url);
        tracing::debug!(%url, "fetching customers");
        let response = self.http.get(&url).send().await.map_err(|e| self.transport_error(e))?;
        let (status, status_text, body) = self.read(response).await?;
        exchange::interpret_customers_response(status, &status_text, &body)
    }

    /// `POST /api/chat?customer_number=<id>` with `{ "message": ... }`.
    pub async fn send_chat_message(&self, customer_id: &str, message: &str) -> Result<String, ExchangeError> {
        let url = exchange::chat_url(&self.base_url, customer_id);
        tracing::debug!(%url, "sending chat message");
        let response = self
            .http
            .post(&url)
            .json(&exchange::chat_request_body(message))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let (status, status_text, body) = self.read(response).await?;
        exchange::interpret_chat_response(status, &status_text, &body)
    }

    async fn read(&self, response: reqwest::Response) -> Result<(u16, String, String), ExchangeError> {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        Ok((status.as_u16(), status_text, body))
    }

    fn transport_error(&self, err: reqwest::Error) -> ExchangeError {
        if err.is_timeout() {
            ExchangeError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            ExchangeError::Transport(err.to_string())
        }
    }
}
