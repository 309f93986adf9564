//! The companion recovery gate.
//!
//! Every injury-sensitive action passes through this check first. A
//! resting companion rejects the action and reports the remaining
//! minutes; a companion whose rest has elapsed transitions back to
//! healthy in the same operation, and the gated action proceeds with no
//! separate recovery message.

use chrono::{DateTime, Utc};

use oakgrove_types::{CompanionStatus, PlayerRecord};

/// Result of gating an action on the companion's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionCheck {
    /// The companion was healthy; the action proceeds.
    Ready,
    /// The rest period elapsed; the record was healed in place and the
    /// action proceeds.
    Recovered,
    /// The companion is still resting; the action is rejected.
    Resting {
        /// Whole minutes until recovery, truncated.
        minutes_left: i64,
    },
}

/// Gate an action on the companion's health, healing in place when the
/// rest period has elapsed.
///
/// An injured record with no recovery timestamp (which the transitions
/// never produce) is treated as already recovered rather than stuck.
pub fn check_companion(record: &mut PlayerRecord, now: DateTime<Utc>) -> CompanionCheck {
    if record.companion_status == CompanionStatus::Healthy {
        return CompanionCheck::Ready;
    }

    if let Some(recovery_at) = record.companion_recovery_at
        && now < recovery_at
    {
        let minutes_left = (recovery_at - now).num_minutes();
        return CompanionCheck::Resting { minutes_left };
    }

    record.companion_status = CompanionStatus::Healthy;
    record.companion_recovery_at = None;
    CompanionCheck::Recovered
}
