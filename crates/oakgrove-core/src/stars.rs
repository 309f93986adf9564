//! Star collection, gated on forest night.
//!
//! During the day the attempt is rejected with the hours remaining
//! until the cycle restarts (the legacy wording calls this the time
//! until night, see [`crate::clock`]). At night a random number of
//! visible stars is offered as a choice menu; picking any of them
//! yields exactly one star, so the offered count is cosmetic.

use rand::Rng;

use oakgrove_types::PlayerRecord;

use crate::clock::GameTime;
use crate::config::StarsConfig;

/// Result of asking for stars to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarOutcome {
    /// Rejected: it is daytime. Nothing was mutated.
    Daytime {
        /// Whole hours until the cycle restart, truncated.
        hours_to_night: u64,
    },
    /// Stars are shining; the player picks one.
    Offered {
        /// How many stars are visible, `1..=max_visible`.
        visible: u32,
    },
}

/// Offer stars for collection, or reject during daytime.
pub fn collect_stars(
    time: &GameTime,
    config: &StarsConfig,
    rng: &mut impl Rng,
) -> StarOutcome {
    if !time.is_night {
        return StarOutcome::Daytime {
            hours_to_night: time.hours_to_cycle_restart(),
        };
    }

    let visible = rng.random_range(1..=config.max_visible.max(1));
    StarOutcome::Offered { visible }
}

/// Catch one offered star. Whichever star was picked, the counter goes
/// up by exactly one. Returns the new star total.
pub fn catch_star(record: &mut PlayerRecord) -> u32 {
    record.stars = record.stars.saturating_add(1);
    record.stars
}
