//! Chat exchanges driven from the terminal.
//!
//! The REPL is sequential, so the session's in-flight gate is always open by
//! the time the next line is read; it still decides which lines are sent.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::{SystemTime, UNIX_EPOCH};

use exchange::{ChatSession, Message};

use crate::api::HttpApi;

/// Run one exchange for `text`.
///
/// Returns the bot line that resolved it, or `None` when the session refused
/// the submission (blank text, missing customer).
pub async fn exchange_once<'a>(api: &HttpApi, session: &'a mut ChatSession, text: &str) -> Option<&'a Message> {
    session.set_input(text);
    let pending = session.begin_exchange(now_ms())?;

    let outcome = api.send_chat_message(&pending.customer_id, &pending.message).await;
    if let Err(e) = &outcome {
        tracing::warn!(customer_id = %pending.customer_id, error = %e, "chat exchange failed");
    }
    session.complete_exchange(pending.ticket, outcome, now_ms());
    session.messages().last()
}

fn now_ms() -> i64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}
