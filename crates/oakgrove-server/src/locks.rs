//! Per-player action serialization.
//!
//! Every player action is a multi-step read-modify-write against the
//! store. Interleaving two actions for the same player would lose
//! updates, so each player gets one async mutex from this arena and
//! holds it for the whole pipeline. Actions for distinct players
//! proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use oakgrove_types::PlayerId;

/// An arena of per-player mutexes, created lazily on first use.
///
/// Entries are never removed; the arena grows with the number of
/// distinct players seen since startup, which matches the player table.
#[derive(Debug, Default)]
pub struct LockArena {
    locks: Mutex<HashMap<PlayerId, Arc<Mutex<()>>>>,
}

impl LockArena {
    /// Get the lock handle for a player, creating it on first use.
    ///
    /// The returned handle must be locked by the caller; this method
    /// only resolves which mutex belongs to the player.
    pub async fn handle(&self, id: PlayerId) -> Arc<Mutex<()>> {
        let mut map = self.locks.lock().await;
        Arc::clone(map.entry(id).or_default())
    }
}
