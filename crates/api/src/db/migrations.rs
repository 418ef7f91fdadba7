//! Canonical migration definitions.
//!
//! The server applies these once each, tracked in a `_migrations` ledger
//! table. Order matters; never edit an applied migration, append a new one.

/// A named migration: `(name, sql)`.
pub type Migration = (&'static str, &'static str);

pub const MIGRATIONS: &[Migration] = &[(
    "0001_schema",
    include_str!("../../migrations/0001_schema.sql"),
)];
