//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render plain data handed down by pages
//! and report user actions through callbacks.

pub mod customer_table;
pub mod message_bubble;
pub mod typing_indicator;
