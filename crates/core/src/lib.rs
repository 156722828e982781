//! Domain types and rules for the dog collector.
//!
//! This crate has no I/O. It holds the shared id/timestamp aliases, the
//! domain error type, form payloads with their validation rules, and the
//! small pieces of logic (meal kinds, photo keys, username rules) that the
//! database and HTTP layers build on.

pub mod accounts;
pub mod error;
pub mod forms;
pub mod meal;
pub mod photo;
pub mod types;
