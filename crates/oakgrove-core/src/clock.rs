//! The forest clock: wall-clock time mapped onto the forest cycle.
//!
//! The clock stores no state of its own. A fixed real-time cycle
//! (4 hours by default) is divided into 13 equal game days; the current
//! day, the day/night flag, and the time remaining in the cycle are all
//! derived from the timestamp passed in. Restartable, infinite, and
//! deterministic given the same instant.
//!
//! `to_cycle_restart` counts down to the next *cycle restart* (the full
//! 4-hour boundary), not to the next day flip. The user-facing text
//! phrases it as time until the next day/night change; the computation
//! is kept as-is and the wording mismatch is a known product decision.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::TimeConfig;

/// Errors that can occur when building the forest clock.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Invalid cycle configuration (zero lengths, bad night threshold).
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// A snapshot of forest time derived from one wall-clock instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameTime {
    /// Current game day, `1..=days_per_cycle`.
    pub day: u64,
    /// Whether it is currently night (day index past the threshold).
    pub is_night: bool,
    /// Seconds until the cycle restarts from day 1.
    pub secs_to_cycle_restart: u64,
}

impl GameTime {
    /// Whole hours until the cycle restart, truncated.
    pub const fn hours_to_cycle_restart(&self) -> u64 {
        self.secs_to_cycle_restart / 3600
    }
}

/// Stateless mapping from wall-clock instants to [`GameTime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestClock {
    /// Real-time seconds in one full cycle.
    cycle_secs: u64,
    /// Game days per cycle.
    days_per_cycle: u64,
    /// Last daylight day; later days are night.
    night_after_day: u64,
}

impl ForestClock {
    /// Build a clock from a validated time configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if either length is zero,
    /// the cycle is shorter than one second per day, or the night
    /// threshold falls outside the cycle.
    pub fn new(config: &TimeConfig) -> Result<Self, ClockError> {
        if config.cycle_secs == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "cycle_secs must be at least 1".to_owned(),
            });
        }
        if config.days_per_cycle == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "days_per_cycle must be at least 1".to_owned(),
            });
        }
        if config.cycle_secs < config.days_per_cycle {
            return Err(ClockError::InvalidConfig {
                reason: "cycle_secs must be at least days_per_cycle".to_owned(),
            });
        }
        if config.night_after_day >= config.days_per_cycle {
            return Err(ClockError::InvalidConfig {
                reason: "night_after_day must be below days_per_cycle".to_owned(),
            });
        }
        Ok(Self {
            cycle_secs: config.cycle_secs,
            days_per_cycle: config.days_per_cycle,
            night_after_day: config.night_after_day,
        })
    }

    /// Derive the forest time for the given instant.
    ///
    /// The day index is
    /// `floor((secs_since_epoch mod cycle) / (cycle / days)) + 1`,
    /// computed exactly in integers as `(within * days) / cycle + 1`.
    /// Instants before the epoch clamp to the cycle origin.
    pub fn at(&self, now: DateTime<Utc>) -> GameTime {
        let secs = u64::try_from(now.timestamp()).unwrap_or(0);
        // cycle_secs >= 1 is guaranteed by the constructor.
        let within = secs.checked_rem(self.cycle_secs).unwrap_or(0);

        // within * days fits u128; the quotient is < days_per_cycle.
        let scaled = u128::from(within).saturating_mul(u128::from(self.days_per_cycle));
        let index = scaled
            .checked_div(u128::from(self.cycle_secs))
            .unwrap_or(0);
        let day = u64::try_from(index).unwrap_or(0).saturating_add(1);

        GameTime {
            day,
            is_night: day > self.night_after_day,
            secs_to_cycle_restart: self.cycle_secs.saturating_sub(within),
        }
    }

    /// Real-time seconds in one full cycle.
    pub const fn cycle_secs(&self) -> u64 {
        self.cycle_secs
    }

    /// Game days per cycle.
    pub const fn days_per_cycle(&self) -> u64 {
        self.days_per_cycle
    }
}
