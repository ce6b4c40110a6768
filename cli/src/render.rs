//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use exchange::{Customer, Message, Sender};

const HEADERS: [&str; 3] = ["Customer Name", "Customer Group", "Customer Number"];

/// Left-aligned table of customers followed by the total row count.
pub fn customers_table(customers: &[Customer]) -> String {
    let rows: Vec<[&str; 3]> = customers
        .iter()
        .map(|c| [c.customer_name.as_str(), c.customer_group.as_str(), c.customer_pk.as_str()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &[rule[0].as_str(), rule[1].as_str(), rule[2].as_str()], &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    let _ = write!(out, "Total Customers: {}", customers.len());
    out
}

fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One conversation line; multi-line text is printed as-is.
pub fn message_line(message: &Message) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    format!("{who}> {}", message.text)
}
