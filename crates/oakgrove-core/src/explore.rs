//! The exploration transition: one "explore" action resolved into a
//! hazard or a reward.
//!
//! Order of operations once the action is accepted:
//!
//! 1. Energy is decremented, unconditionally.
//! 2. The ordered hazard table is evaluated front to back with
//!    independent uniform draws; the first successful draw wins and
//!    later entries are never drawn.
//! 3. On a hazard, the companion is injured and no acorns are awarded.
//! 4. Otherwise the acorn yield is `uniform(0..=max_yield)` times the
//!    star bonus, committed to the running total.
//! 5. A single-step level check runs after the commit: crossing the
//!    `level * acorns_per_level` threshold raises the level once and
//!    awards the star/energy reward. One exploration never raises more
//!    than one level, even if the total would justify several.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use oakgrove_types::{CompanionStatus, ExploreSite, Hazard, PlayerRecord};

use crate::config::{GameConfig, HazardOdds};
use crate::error::GameError;

/// Rewards granted by a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// The level just reached.
    pub new_level: u32,
    /// Stars awarded.
    pub stars_awarded: u32,
    /// Energy awarded (not clamped to the cap at award time).
    pub energy_awarded: u32,
}

/// Result of one exploration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreOutcome {
    /// Rejected: not enough energy. Nothing was mutated.
    TooTired,
    /// A hazard struck: the companion is injured and resting.
    Hazard {
        /// The hazard that triggered.
        hazard: Hazard,
        /// The site that was being explored.
        site: ExploreSite,
        /// When the companion will be able to explore again.
        recovery_at: DateTime<Utc>,
    },
    /// The exploration succeeded.
    Found {
        /// The site that was explored.
        site: ExploreSite,
        /// Acorns added to the running total.
        acorns_found: u32,
        /// Level-up details when the threshold was crossed.
        level_up: Option<LevelUp>,
    },
}

/// Evaluate the ordered hazard table with independent draws.
///
/// Each entry gets its own uniform draw in `[0, 1)`; the first entry
/// whose draw lands under its probability wins and evaluation stops.
/// This is deliberately not a normalized categorical draw: the observed
/// hazard frequencies depend on the early exit.
pub fn roll_hazard(rng: &mut impl Rng, table: &[HazardOdds]) -> Option<Hazard> {
    for odds in table {
        if rng.random::<f64>() < odds.probability {
            return Some(odds.kind);
        }
    }
    None
}

/// Resolve one exploration of `site` against the player record.
///
/// The caller must have run the energy regeneration pass and the
/// companion gate first.
///
/// # Errors
///
/// Returns [`GameError::ArithmeticOverflow`] if a counter would
/// overflow (practically unreachable with the stock configuration).
pub fn explore(
    record: &mut PlayerRecord,
    site: ExploreSite,
    now: DateTime<Utc>,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Result<ExploreOutcome, GameError> {
    if record.energy < config.energy.explore_cost {
        return Ok(ExploreOutcome::TooTired);
    }

    record.energy = record.energy.saturating_sub(config.energy.explore_cost);

    if let Some(hazard) = roll_hazard(rng, &config.exploration.hazards) {
        let recovery_at = now + Duration::hours(config.companion.recovery_hours);
        record.companion_status = CompanionStatus::Injured;
        record.companion_recovery_at = Some(recovery_at);
        tracing::debug!(player = %record.id, hazard = hazard.as_str(), "hazard struck");
        return Ok(ExploreOutcome::Hazard {
            hazard,
            site,
            recovery_at,
        });
    }

    let star_bonus = if record.stars > 0 {
        config.exploration.star_bonus
    } else {
        1
    };
    let roll: u32 = rng.random_range(0..=config.exploration.max_yield);
    let acorns_found = roll.saturating_mul(star_bonus);

    record.acorns =
        record
            .acorns
            .checked_add(acorns_found)
            .ok_or_else(|| GameError::ArithmeticOverflow {
                context: String::from("acorn total overflow"),
            })?;

    let level_up = check_level_up(record, config)?;

    Ok(ExploreOutcome::Found {
        site,
        acorns_found,
        level_up,
    })
}

/// Single-step level check after an acorn commit.
///
/// At most one level is granted per call, mirroring the legacy bot's
/// per-action check rather than a catch-up loop.
fn check_level_up(record: &mut PlayerRecord, config: &GameConfig) -> Result<Option<LevelUp>, GameError> {
    let threshold = record.next_level_target(config.leveling.acorns_per_level);
    if record.acorns < threshold {
        return Ok(None);
    }

    record.level = record
        .level
        .checked_add(1)
        .ok_or_else(|| GameError::ArithmeticOverflow {
            context: String::from("level increment overflow"),
        })?;
    record.stars = record
        .stars
        .checked_add(config.leveling.reward_stars)
        .ok_or_else(|| GameError::ArithmeticOverflow {
            context: String::from("star reward overflow"),
        })?;
    // Deliberately uncapped; the next regeneration pass clamps.
    record.energy = record.energy.saturating_add(config.leveling.reward_energy);

    Ok(Some(LevelUp {
        new_level: record.level,
        stars_awarded: config.leveling.reward_stars,
        energy_awarded: config.leveling.reward_energy,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use oakgrove_types::PlayerId;

    use super::*;

    fn fresh_record(now: DateTime<Utc>) -> PlayerRecord {
        PlayerRecord::new(PlayerId::new(1), None, now)
    }

    /// Config whose hazard table is replaced by the given entries.
    fn config_with_hazards(hazards: Vec<HazardOdds>) -> GameConfig {
        let mut config = GameConfig::default();
        config.exploration.hazards = hazards;
        config
    }

    fn no_hazards() -> GameConfig {
        config_with_hazards(Vec::new())
    }

    fn certain(kind: Hazard) -> HazardOdds {
        HazardOdds {
            kind,
            probability: 1.0,
        }
    }

    fn never(kind: Hazard) -> HazardOdds {
        HazardOdds {
            kind,
            probability: 0.0,
        }
    }

    #[test]
    fn zero_energy_rejects_without_mutation() {
        let now = Utc::now();
        let mut record = fresh_record(now);
        record.energy = 0;
        let before = record.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let outcome =
            explore(&mut record, ExploreSite::North, now, &no_hazards(), &mut rng).unwrap();
        assert_eq!(outcome, ExploreOutcome::TooTired);
        assert_eq!(record, before);
    }

    #[test]
    fn energy_is_decremented_once_accepted() {
        let now = Utc::now();
        let mut record = fresh_record(now);
        let mut rng = StdRng::seed_from_u64(2);

        let _ = explore(&mut record, ExploreSite::South, now, &no_hazards(), &mut rng).unwrap();
        assert_eq!(record.energy, 9);
    }

    #[test]
    fn guaranteed_fox_injures_and_withholds_acorns() {
        let now = Utc::now();
        let mut record = fresh_record(now);
        let config = config_with_hazards(vec![certain(Hazard::Fox)]);
        let mut rng = StdRng::seed_from_u64(3);

        let outcome =
            explore(&mut record, ExploreSite::Underground, now, &config, &mut rng).unwrap();
        let expected_recovery = now + Duration::hours(2);
        assert_eq!(
            outcome,
            ExploreOutcome::Hazard {
                hazard: Hazard::Fox,
                site: ExploreSite::Underground,
                recovery_at: expected_recovery,
            }
        );
        assert_eq!(record.companion_status, CompanionStatus::Injured);
        assert_eq!(record.companion_recovery_at, Some(expected_recovery));
        assert_eq!(record.acorns, 0);
        assert_eq!(record.energy, 9);
    }

    #[test]
    fn first_matching_hazard_wins() {
        // All three entries would trigger; only the first is reported,
        // every time.
        let config = config_with_hazards(vec![
            certain(Hazard::Fox),
            certain(Hazard::Eagle),
            certain(Hazard::Storm),
        ]);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            assert_eq!(
                roll_hazard(&mut rng, &config.exploration.hazards),
                Some(Hazard::Fox)
            );
        }
    }

    #[test]
    fn later_hazards_reachable_when_earlier_never_fire() {
        let config = config_with_hazards(vec![never(Hazard::Fox), certain(Hazard::Eagle)]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(
                roll_hazard(&mut rng, &config.exploration.hazards),
                Some(Hazard::Eagle)
            );
        }
    }

    #[test]
    fn empty_table_never_triggers() {
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(roll_hazard(&mut rng, &[]), None);
    }

    #[test]
    fn yield_stays_within_roll_range() {
        let now = Utc::now();
        let config = no_hazards();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut record = fresh_record(now);
            let outcome =
                explore(&mut record, ExploreSite::North, now, &config, &mut rng).unwrap();
            match outcome {
                ExploreOutcome::Found { acorns_found, .. } => assert!(acorns_found <= 5),
                other => assert_eq!(other, ExploreOutcome::TooTired, "unexpected outcome"),
            }
        }
    }

    #[test]
    fn star_bonus_doubles_the_same_roll() {
        let now = Utc::now();
        let config = no_hazards();

        // Same seed, same draw sequence; the only difference is the
        // star counter, so the yield must be exactly doubled.
        let mut rng_plain = StdRng::seed_from_u64(8);
        let mut record_plain = fresh_record(now);
        let plain =
            explore(&mut record_plain, ExploreSite::North, now, &config, &mut rng_plain).unwrap();

        let mut rng_starred = StdRng::seed_from_u64(8);
        let mut record_starred = fresh_record(now);
        record_starred.stars = 1;
        let starred = explore(
            &mut record_starred,
            ExploreSite::North,
            now,
            &config,
            &mut rng_starred,
        )
        .unwrap();

        let yield_of = |outcome: ExploreOutcome| match outcome {
            ExploreOutcome::Found { acorns_found, .. } => Some(acorns_found),
            ExploreOutcome::TooTired | ExploreOutcome::Hazard { .. } => None,
        };
        let base = yield_of(plain).unwrap();
        let doubled = yield_of(starred).unwrap();
        assert_eq!(doubled, base.saturating_mul(2));
    }

    #[test]
    fn level_up_at_the_threshold_awards_star_and_energy() {
        let now = Utc::now();
        let config = no_hazards();
        let mut rng = StdRng::seed_from_u64(9);
        let mut record = fresh_record(now);
        record.acorns = 49;

        let mut crossing = None;
        for _ in 0..200 {
            record.energy = 10;
            let outcome =
                explore(&mut record, ExploreSite::South, now, &config, &mut rng).unwrap();
            if let ExploreOutcome::Found {
                level_up: Some(level_up),
                ..
            } = outcome
            {
                crossing = Some(level_up);
                break;
            }
        }

        let level_up = crossing.unwrap();
        assert_eq!(level_up.new_level, 2);
        assert_eq!(level_up.stars_awarded, 1);
        assert_eq!(level_up.energy_awarded, 5);
        assert!(record.acorns >= 50);
        assert_eq!(record.level, 2);
        assert_eq!(record.stars, 1);
        // Energy was 10 entering the crossing explore: -1 cost, +5 reward.
        assert_eq!(record.energy, 14);
    }

    #[test]
    fn level_check_is_single_step_not_a_cascade() {
        let now = Utc::now();
        let config = no_hazards();
        let mut rng = StdRng::seed_from_u64(10);
        let mut record = fresh_record(now);
        // Far past several thresholds at once.
        record.acorns = 300;

        let outcome =
            explore(&mut record, ExploreSite::North, now, &config, &mut rng).unwrap();
        assert!(matches!(
            outcome,
            ExploreOutcome::Found {
                level_up: Some(LevelUp { new_level: 2, .. }),
                ..
            }
        ));
        assert_eq!(record.level, 2);
        assert_eq!(record.stars, 1);
    }

    #[test]
    fn hazard_skips_the_level_check() {
        let now = Utc::now();
        let config = config_with_hazards(vec![certain(Hazard::Storm)]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut record = fresh_record(now);
        record.acorns = 300;

        let _ = explore(&mut record, ExploreSite::North, now, &config, &mut rng).unwrap();
        assert_eq!(record.level, 1);
        assert_eq!(record.stars, 0);
    }
}
