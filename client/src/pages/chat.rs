//! Chat page — one conversation with the assistant on behalf of a customer.
//!
//! ARCHITECTURE
//! ============
//! The page owns a route-scoped `ChatSession` signal. A submission runs
//! `begin_exchange` inside a single signal update, so the optimistic append
//! and the in-flight gate happen before any await point; the request then
//! runs on a local task and `complete_exchange` releases the gate.
//!
//! A route change swaps in a fresh session while the old request may still be
//! running. Its completion carries the old session's ticket and is dropped.
//!
//! SYSTEM CONTEXT
//! ==============
//! The customer identifier comes from the `/chat/:id` route. Without one the
//! page renders a blocking error instead of the conversation.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use exchange::ChatSession;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::message_bubble::MessageBubble;
use crate::components::typing_indicator::TypingIndicator;
use crate::net::api;
use crate::util::clock::now_ms;

fn header_title(customer_id: Option<&str>) -> String {
    format!("Agentic AI ChatBot for Customer: {}", customer_id.unwrap_or_default())
}

/// Enter submits; Shift+Enter is left to the input.
fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Chat page for the customer named by the route's `id` parameter.
#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let session = RwSignal::new(ChatSession::new(
        params.with_untracked(|p| p.get("id")).as_deref(),
    ));
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Moving between customers keeps the component; start a fresh session.
    Effect::new(move || {
        let next = ChatSession::new(params.read().get("id").as_deref());
        let changed = session.with_untracked(|s| s.customer_id() != next.customer_id());
        if changed {
            session.set(next);
        }
    });

    Effect::new(move || {
        let _ = session.with(|s| (s.messages().len(), s.is_in_flight()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move || {
        let Some(pending) = session.try_update(|s| s.begin_exchange(now_ms())).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = api::send_chat_message(&pending.customer_id, &pending.message).await;
            // No-op once the page has been unmounted and the signal disposed.
            let _ = session
                .try_update(|s| s.complete_exchange(pending.ticket, outcome, now_ms()));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            send();
        }
    };

    let in_flight = move || session.with(ChatSession::is_in_flight);

    view! {
        <Show
            when=move || session.with(ChatSession::has_customer)
            fallback=|| {
                view! {
                    <div class="chat-page chat-page--blocked">
                        <p class="chat-page__fatal" role="alert">
                            "Error: Customer ID not found in URL."
                        </p>
                    </div>
                }
            }
        >
            <div class="chat-page">
                <header class="chat-page__header">
                    <h1>{move || session.with(|s| header_title(s.customer_id()))}</h1>
                </header>

                <div class="chat-page__messages" node_ref=messages_ref>
                    {move || {
                        session
                            .with(|s| s.messages().to_vec())
                            .into_iter()
                            .map(|message| view! { <MessageBubble message=message/> })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=in_flight>
                        <TypingIndicator/>
                    </Show>
                </div>

                <Show when=move || session.with(|s| s.last_error().is_some())>
                    <div class="chat-page__error" role="alert">
                        {move || session.with(|s| s.last_error().unwrap_or_default().to_owned())}
                    </div>
                </Show>

                <div class="chat-page__input-row">
                    <input
                        class="chat-page__input"
                        type="text"
                        placeholder="Type your message..."
                        aria-label="Chat message input"
                        prop:value=move || session.with(|s| s.input().to_owned())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            session.update(|s| s.set_input(text));
                        }
                        on:keydown=on_keydown
                        disabled=in_flight
                    />
                    <button
                        class="btn btn--primary chat-page__send"
                        aria-label="Send message"
                        on:click=move |_| send()
                        disabled=move || !session.with(ChatSession::can_submit)
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
