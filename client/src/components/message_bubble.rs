//! Single chat line, aligned and colored by author.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use exchange::{Message, Sender};
use leptos::prelude::*;

fn row_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message-row message-row--user",
        Sender::Bot => "message-row message-row--bot",
    }
}

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message-bubble message-bubble--user",
        Sender::Bot => "message-bubble message-bubble--bot",
    }
}

/// Chat bubble. Text is rendered as-is; `pre-wrap` keeps reply newlines.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    view! {
        <div class=row_class(message.sender)>
            <div class=bubble_class(message.sender) style="white-space: pre-wrap">
                {message.text}
            </div>
        </div>
    }
}
