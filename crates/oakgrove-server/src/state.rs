//! Shared application state for the action API.
//!
//! [`AppState`] is the explicit context object constructed once at
//! startup: the connection pool, the forest clock, the game rules, and
//! the per-player lock arena. It is wrapped in [`Arc`](std::sync::Arc)
//! and injected into handlers via Axum's `State` extractor -- there is
//! no ambient global state anywhere in the process.

use oakgrove_core::{ForestClock, GameConfig};
use oakgrove_db::PostgresPool;

use crate::locks::LockArena;

/// Shared state for the Axum application.
pub struct AppState {
    /// `PostgreSQL` connection pool.
    pub pool: PostgresPool,
    /// Stateless wall-clock to forest-time mapping.
    pub clock: ForestClock,
    /// Game rules loaded at startup.
    pub config: GameConfig,
    /// Per-player action serialization.
    pub locks: LockArena,
}

impl AppState {
    /// Assemble the application state from its startup collaborators.
    pub fn new(pool: PostgresPool, clock: ForestClock, config: GameConfig) -> Self {
        Self {
            pool,
            clock,
            config,
            locks: LockArena::default(),
        }
    }
}
