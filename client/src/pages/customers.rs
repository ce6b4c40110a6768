//! Customer list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the customer snapshot once per activation and hands row
//! activation off to the chat route. There is no polling and no retry; a
//! reload is the recovery path for a failed fetch.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use exchange::{CustomerListing, ListingView};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::customer_table::{CustomerTable, CustomerTableSkeleton};
use crate::net::api;

/// Route path of the chat page for one customer.
fn chat_path(customer_pk: &str) -> String {
    format!("/chat/{customer_pk}")
}

/// Customer list page — skeleton, error, empty or table branch.
#[component]
pub fn CustomersPage() -> impl IntoView {
    let listing = RwSignal::new(CustomerListing::new());
    let selected = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    // Effects only run in the browser, so SSR renders the loading branch.
    Effect::new(move || {
        listing.update(CustomerListing::begin_fetch);
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_customers().await;
            listing.update(|l| l.resolve(outcome));
        });
    });

    Effect::new(move || {
        if let Some(pk) = selected.get() {
            navigate(&chat_path(&pk), NavigateOptions::default());
        }
    });

    let on_select = Callback::new(move |pk: String| selected.set(Some(pk)));

    let body = move || {
        let state = listing.get();
        match state.view() {
            ListingView::Loading => view! { <CustomerTableSkeleton/> }.into_any(),
            ListingView::Error(message) => {
                let message = message.to_owned();
                view! {
                    <div class="customers-page__error" role="alert">
                        <p>"Error loading customers: " {message}</p>
                        <p class="customers-page__hint">
                            "Please try refreshing the page or check the API connection."
                        </p>
                    </div>
                }
                    .into_any()
            }
            ListingView::Empty => {
                view! { <p class="customers-page__empty">"No customers found."</p> }.into_any()
            }
            ListingView::Table(rows) => {
                view! { <CustomerTable customers=rows.to_vec() on_select=on_select/> }.into_any()
            }
        }
    };

    view! {
        <div class="customers-page">
            <header class="customers-page__header">
                <h1>"Customers"</h1>
                <p class="customers-page__subtitle">
                    "A list of all registered customers. Click a row to chat."
                </p>
            </header>
            <div class="customers-page__body">{body}</div>
            {move || {
                listing
                    .get()
                    .total()
                    .map(|total| {
                        view! { <div class="customers-page__total">"Total Customers: " {total}</div> }
                    })
            }}
        </div>
    }
}
