//! Database row models.
//!
//! Each submodule contains a `FromRow` struct matching the table row and the
//! conversions to and from the `capworks_core` domain type.

pub mod project;
