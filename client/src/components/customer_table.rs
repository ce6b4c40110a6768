//! Customer table and its loading skeleton.

use exchange::Customer;
use leptos::prelude::*;

const SKELETON_ROWS: usize = 5;

/// Customer rows; activating a row reports its `customer_pk`.
#[component]
pub fn CustomerTable(customers: Vec<Customer>, on_select: Callback<String>) -> impl IntoView {
    let rows = customers
        .into_iter()
        .map(|customer| {
            let pk = customer.customer_pk.clone();
            view! {
                <tr class="customer-table__row" on:click=move |_| on_select.run(pk.clone())>
                    <td class="customer-table__name">{customer.customer_name}</td>
                    <td>{customer.customer_group}</td>
                    <td class="customer-table__number">{customer.customer_pk}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="customer-table">
            <thead>
                <tr>
                    <th>"Customer Name"</th>
                    <th>"Customer Group"</th>
                    <th>"Customer Number"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

/// Placeholder rows shown while the list is loading.
#[component]
pub fn CustomerTableSkeleton() -> impl IntoView {
    view! {
        <div class="customer-skeleton" aria-busy="true">
            <div class="customer-skeleton__header"></div>
            {(0..SKELETON_ROWS)
                .map(|_| view! { <div class="customer-skeleton__row"></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}
