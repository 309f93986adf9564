//! `PostgreSQL` data layer for the Oakgrove forest game.
//!
//! The store has upsert-on-first-contact semantics: a player record is
//! created with game defaults the first time an identity is seen, read
//! back on every action, and written back under the caller's per-player
//! lock. Records are never deleted.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time
//! checked) to avoid requiring a live database at build time. All
//! queries are parameterized.

pub mod error;
pub mod player_store;
pub mod postgres;

pub use error::DbError;
pub use player_store::{PlayerRow, PlayerStore};
pub use postgres::{PostgresConfig, PostgresPool};
