//! The per-player game record.
//!
//! One record exists per player identity, created on first contact and
//! never deleted. All game transitions mutate this record in memory;
//! the data layer persists it as a whole under the per-player lock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::CompanionStatus;
use crate::ids::PlayerId;

/// Energy a freshly created player starts with (also the regen cap).
pub const STARTING_ENERGY: u32 = 10;

/// Mutable game state for a single player.
///
/// Invariants maintained by the core transitions:
/// - `companion_recovery_at` is `Some` if and only if the companion is
///   [`CompanionStatus::Injured`].
/// - `energy` stays within the regeneration cap except transiently
///   right after a level-up reward (the next regeneration pass clamps
///   it back).
/// - `trees` and `companions` are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Platform-assigned player identity.
    pub id: PlayerId,
    /// Display name captured at first contact, if the platform gave one.
    pub display_name: Option<String>,
    /// Acorns gathered so far.
    pub acorns: u32,
    /// Stars caught so far. Never decreases.
    pub stars: u32,
    /// Current level, starting at 1.
    pub level: u32,
    /// Current energy.
    pub energy: u32,
    /// When `energy` was last recalculated.
    pub last_energy_update: DateTime<Utc>,
    /// Health state of the companion squirrel.
    pub companion_status: CompanionStatus,
    /// When an injured companion becomes healthy again.
    pub companion_recovery_at: Option<DateTime<Utc>>,
    /// Identifiers of owned trees.
    pub trees: Vec<String>,
    /// Identifiers of owned companions.
    pub companions: Vec<String>,
}

impl PlayerRecord {
    /// Create a fresh record with first-contact defaults.
    pub fn new(id: PlayerId, display_name: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            display_name,
            acorns: 0,
            stars: 0,
            level: 1,
            energy: STARTING_ENERGY,
            last_energy_update: now,
            companion_status: CompanionStatus::Healthy,
            companion_recovery_at: None,
            trees: vec![String::from("oak_1")],
            companions: vec![String::from("squirrel_1")],
        }
    }

    /// Acorn total required for the next level-up.
    pub fn next_level_target(&self, acorns_per_level: u32) -> u32 {
        self.level.saturating_mul(acorns_per_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_has_first_contact_defaults() {
        let now = Utc::now();
        let record = PlayerRecord::new(PlayerId::new(7), Some(String::from("Nika")), now);
        assert_eq!(record.acorns, 0);
        assert_eq!(record.stars, 0);
        assert_eq!(record.level, 1);
        assert_eq!(record.energy, STARTING_ENERGY);
        assert_eq!(record.companion_status, CompanionStatus::Healthy);
        assert_eq!(record.companion_recovery_at, None);
        assert_eq!(record.trees, vec![String::from("oak_1")]);
        assert_eq!(record.companions, vec![String::from("squirrel_1")]);
        assert_eq!(record.last_energy_update, now);
    }

    #[test]
    fn next_level_target_scales_with_level() {
        let mut record = PlayerRecord::new(PlayerId::new(1), None, Utc::now());
        assert_eq!(record.next_level_target(50), 50);
        record.level = 3;
        assert_eq!(record.next_level_target(50), 150);
    }
}
