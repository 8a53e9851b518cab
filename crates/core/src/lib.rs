//! Capital works project tracking: domain types, schedule derivation and
//! the project lifecycle engine.
//!
//! Nothing in this crate performs I/O except the in-memory
//! [`store::InMemoryProjectStore`]; persistence backends implement
//! [`store::ProjectStore`] in their own crates.

pub mod audit_note;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod lifecycle;
pub mod project;
pub mod schedule;
pub mod store;
pub mod types;
