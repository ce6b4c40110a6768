//! Animated dots shown while a chat exchange is in flight.

use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message-row message-row--bot" aria-label="Assistant is typing">
            <div class="message-bubble message-bubble--bot typing-indicator">
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
            </div>
        </div>
    }
}
