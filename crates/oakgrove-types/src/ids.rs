//! Type-safe identifier for players.
//!
//! Player identity is assigned by the external platform the game is
//! served through (a numeric account id), so the wrapper carries an
//! `i64` rather than a generated UUID. The newtype prevents accidental
//! mixing with other integer values at compile time and maps directly
//! onto the `BIGINT` primary key in the players table.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the external platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Wrap a raw platform account id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the inner `i64` value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<PlayerId> for i64 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip_serde() {
        let original = PlayerId::new(42);
        let json = serde_json::to_string(&original).ok();
        assert_eq!(json.as_deref(), Some("42"));
        let restored: Result<PlayerId, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn id_display_matches_inner() {
        let id = PlayerId::new(1_234_567);
        assert_eq!(id.to_string(), "1234567");
    }
}
