//! Shared database schema, migrations, and query builders.
//!
//! Every caller-supplied value travels as a bound parameter inside
//! `sea_query::Values`; SQL text never contains request data.

pub mod events;
pub mod migrations;
pub mod notes;
pub mod tables;

// Re-export tables for convenience
pub use tables::*;

/// A built statement: `(sql, bound values)`.
pub type Built = (String, sea_query::Values);
