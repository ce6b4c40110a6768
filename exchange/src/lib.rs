//! Shared customer/chat model for the Bake Assist backend API.
//!
//! This crate owns the wire representation and the view-state machines used
//! by both `client` (browser) and `cli` (terminal). It performs no I/O: each
//! transport issues the HTTP request itself and hands the raw status and body
//! to [`response`] for interpretation.

pub mod chat;
pub mod endpoint;
pub mod error;
pub mod listing;
pub mod response;
pub mod types;

pub use chat::{ChatSession, ExchangeTicket, Message, PendingExchange, Sender};
pub use endpoint::{DEFAULT_API_BASE, chat_url, customers_url, normalize_base};
pub use error::ExchangeError;
pub use listing::{CustomerListing, ListingStatus, ListingView};
pub use response::{chat_request_body, interpret_chat_response, interpret_customers_response};
pub use types::{ApiErrorBody, ChatRequest, Customer};
