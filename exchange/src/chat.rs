//! Chat session state for one customer conversation.
//!
//! ARCHITECTURE
//! ============
//! A session is a small state machine driven by two calls per exchange:
//! `begin_exchange` (optimistic append + gate) and `complete_exchange`
//! (resolve + release). The transport runs in between. Splitting the flow
//! this way keeps the browser and terminal clients on the same ordering rules
//! without sharing an async runtime.
//!
//! INVARIANTS
//! ==========
//! - `messages` is append-only for the life of the session.
//! - At most one exchange is in flight; a submission while the gate is closed
//!   changes nothing.
//! - The user message of an exchange is always appended before its reply or
//!   error message.
//! - A completion is applied only when its ticket matches the exchange in
//!   flight; results for a replaced session or a finished exchange are dropped.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ExchangeError;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// First bot line shown in every new session.
pub const GREETING: &str = "Hello! How can I help you today?";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single line in the conversation log.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp_ms: i64,
}

/// Identifies one exchange of one session.
///
/// Generations are process-unique, so a ticket minted by a session that has
/// since been replaced never matches its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExchangeTicket {
    generation: u64,
    seq: u64,
}

/// The one request an accepted submission requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingExchange {
    pub ticket: ExchangeTicket,
    pub customer_id: String,
    pub message: String,
}

/// View-local conversation state. Dropped with the view; nothing persists.
#[derive(Clone, Debug)]
pub struct ChatSession {
    customer_id: Option<String>,
    messages: Vec<Message>,
    input: String,
    in_flight: Option<ExchangeTicket>,
    last_error: Option<String>,
    generation: u64,
    seq: u64,
}

impl ChatSession {
    /// Start a session for the route's customer identifier.
    ///
    /// A missing, empty, or whitespace-only identifier yields a session that
    /// refuses every submission; views render a blocking error for it.
    #[must_use]
    pub fn new(customer_id: Option<&str>) -> Self {
        let customer_id = customer_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToOwned::to_owned);
        Self {
            customer_id,
            messages: vec![Message {
                id: "init".to_owned(),
                sender: Sender::Bot,
                text: GREETING.to_owned(),
                timestamp_ms: 0,
            }],
            input: String::new(),
            in_flight: None,
            last_error: None,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            seq: 0,
        }
    }

    #[must_use]
    pub fn has_customer(&self) -> bool {
        self.customer_id.is_some()
    }

    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the pending input buffer. Typing stays possible while in flight.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message of the most recent failed exchange, cleared on the next submit.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a submission right now would start an exchange.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.has_customer() && self.in_flight.is_none() && !self.input.trim().is_empty()
    }

    /// Accept the pending input as a new exchange.
    ///
    /// Appends the trimmed user message, clears the input buffer and closes
    /// the in-flight gate before returning the request to issue. Returns
    /// `None` without touching any state when [`Self::can_submit`] is false.
    pub fn begin_exchange(&mut self, now_ms: i64) -> Option<PendingExchange> {
        if !self.can_submit() {
            return None;
        }
        let customer_id = self.customer_id.clone()?;
        let message = self.input.trim().to_owned();

        self.push(Sender::User, "user", message.clone(), now_ms);
        let ticket = ExchangeTicket {
            generation: self.generation,
            seq: self.seq,
        };
        self.input.clear();
        self.in_flight = Some(ticket);
        self.last_error = None;

        Some(PendingExchange {
            ticket,
            customer_id,
            message,
        })
    }

    /// Resolve the in-flight exchange and reopen the gate.
    ///
    /// Replies are appended verbatim. Failures are appended inline as
    /// `Error: <message>` and also kept as [`Self::last_error`]. Ignored when
    /// `ticket` is not the exchange currently in flight.
    pub fn complete_exchange(
        &mut self,
        ticket: ExchangeTicket,
        outcome: Result<String, ExchangeError>,
        now_ms: i64,
    ) {
        if self.in_flight != Some(ticket) {
            return;
        }
        match outcome {
            Ok(reply) => self.push(Sender::Bot, "bot", reply, now_ms),
            Err(err) => {
                let message = err.to_string();
                self.push(Sender::Bot, "err", format!("Error: {message}"), now_ms);
                self.last_error = Some(message);
            }
        }
        self.in_flight = None;
    }

    fn push(&mut self, sender: Sender, kind: &str, text: String, now_ms: i64) {
        self.seq = self.seq.saturating_add(1);
        self.messages.push(Message {
            id: format!("{kind}-{now_ms}-{}", self.seq),
            sender,
            text,
            timestamp_ms: now_ms,
        });
    }
}
