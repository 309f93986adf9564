//! Energy regeneration over elapsed real time.
//!
//! Energy regains 2 points per elapsed hour (fractional hours truncate)
//! up to the cap of 10. The regeneration pass runs before every
//! energy-consuming or energy-reporting operation, and the resulting
//! value plus the fresh timestamp is committed together with the action
//! that follows.
//!
//! The regeneration pass is also where an over-cap value (possible
//! right after a level-up reward) is clamped back down, matching the
//! legacy rule `new = min(cap, old + floor(elapsed_hours * rate))`.

use chrono::{DateTime, Utc};

use oakgrove_types::PlayerRecord;

use crate::config::EnergyConfig;

/// Compute regenerated energy for the elapsed time since `last_update`.
///
/// A `last_update` in the future counts as zero elapsed time (the value
/// is still clamped to the cap). The formula is
/// `min(cap, energy + floor(elapsed_secs * regen_per_hour / 3600))`.
pub fn regenerate(
    energy: u32,
    last_update: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &EnergyConfig,
) -> u32 {
    let elapsed_secs = u64::try_from((now - last_update).num_seconds()).unwrap_or(0);
    let gained_wide = u128::from(elapsed_secs)
        .saturating_mul(u128::from(config.regen_per_hour))
        .checked_div(3600)
        .unwrap_or(0);
    let gained = u32::try_from(gained_wide).unwrap_or(u32::MAX);
    energy.saturating_add(gained).min(config.cap)
}

/// Recalculate the record's energy in place and stamp the update time.
pub fn apply_regen(record: &mut PlayerRecord, now: DateTime<Utc>, config: &EnergyConfig) {
    record.energy = regenerate(record.energy, record.last_energy_update, now, config);
    record.last_energy_update = now;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;

    use oakgrove_types::PlayerId;

    use super::*;

    fn config() -> EnergyConfig {
        EnergyConfig::default()
    }

    #[test]
    fn two_points_per_hour_truncated() {
        let now = Utc::now();
        // 90 minutes => floor(1.5h * 2) = 3 points.
        let last = now - Duration::minutes(90);
        assert_eq!(regenerate(2, last, now, &config()), 5);
    }

    #[test]
    fn fractional_hours_truncate() {
        let now = Utc::now();
        // 29 minutes => floor(0.483h * 2) = 0.
        let last = now - Duration::minutes(29);
        assert_eq!(regenerate(4, last, now, &config()), 4);
        // 30 minutes is exactly one point.
        let last = now - Duration::minutes(30);
        assert_eq!(regenerate(4, last, now, &config()), 5);
    }

    #[test]
    fn capped_at_ten_for_any_elapsed_time() {
        let now = Utc::now();
        for hours in [0_i64, 1, 5, 500] {
            let last = now - Duration::hours(hours);
            assert_eq!(regenerate(10, last, now, &config()), 10);
        }
        let last = now - Duration::hours(1000);
        assert_eq!(regenerate(0, last, now, &config()), 10);
    }

    #[test]
    fn future_last_update_means_no_regeneration() {
        let now = Utc::now();
        let last = now + Duration::hours(3);
        assert_eq!(regenerate(4, last, now, &config()), 4);
    }

    #[test]
    fn over_cap_value_clamps_even_with_no_elapsed_time() {
        // A level-up reward can push energy past the cap; the next
        // regeneration pass brings it back down.
        let now = Utc::now();
        assert_eq!(regenerate(14, now, now, &config()), 10);
    }

    #[test]
    fn apply_regen_stamps_the_update_time() {
        let now = Utc::now();
        let mut record = PlayerRecord::new(PlayerId::new(1), None, now - Duration::hours(2));
        record.energy = 3;
        apply_regen(&mut record, now, &config());
        assert_eq!(record.energy, 7);
        assert_eq!(record.last_energy_update, now);
    }
}
