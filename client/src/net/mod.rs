//! Networking for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser requests. Wire types and response interpretation
//! come from the shared `exchange` crate.

pub mod api;
