//! User-facing message text and follow-up action menus.
//!
//! The wording follows the legacy bot line for line, emoji included,
//! so a player migrating between front ends sees the same game. Each
//! builder pairs the text with the follow-up [`ActionId`] set a front
//! end renders as buttons.

use oakgrove_core::clock::GameTime;
use oakgrove_core::config::GameConfig;
use oakgrove_core::explore::LevelUp;
use oakgrove_types::{ActionId, ActionOutcome, CompanionStatus, ExploreSite, Hazard, PlayerRecord};

/// Name used when the platform supplied no display name.
const FALLBACK_NAME: &str = "friend";

/// First-contact welcome with the current forest time.
pub fn welcome(record: &PlayerRecord, time: &GameTime, days_per_cycle: u64) -> ActionOutcome {
    let name = record.display_name.as_deref().unwrap_or(FALLBACK_NAME);
    let phase = if time.is_night { "night" } else { "day" };
    ActionOutcome::new(
        format!(
            "Welcome to the Zagros Oak Forest, {name}! \u{1f333}\n\
             You own a mighty oak tree and a cute squirrel. Collect acorns, \
             gather stars, and beware of threats! \u{1f63a}\n\
             It's currently {phase} (Day {day}/{days_per_cycle}). \
             You can collect stars at night!",
            day = time.day,
        ),
        vec![
            ActionId::Explore,
            ActionId::CollectStar,
            ActionId::Status,
            ActionId::Help,
        ],
    )
}

/// The game guide.
pub fn help_guide(config: &GameConfig) -> ActionOutcome {
    ActionOutcome::new(
        format!(
            "\u{1f333} Zagros Oak Forest Guide \u{1f333}\n\
             - Explore (\u{1f333}) to collect acorns. Each exploration costs {cost} energy.\n\
             - At night (after Day {night_after}), collect stars (\u{1f31f}) to increase your acorn chances.\n\
             - Watch out for foxes, eagles, and storms! If your squirrel gets injured, it needs {recovery} hours to recover.\n\
             - Level up every {per_level} acorns and get rewards!\n\
             - Energy regenerates by {regen} per hour (max {cap}).",
            cost = config.energy.explore_cost,
            night_after = config.time.night_after_day,
            recovery = config.companion.recovery_hours,
            per_level = config.leveling.acorns_per_level,
            regen = config.energy.regen_per_hour,
            cap = config.energy.cap,
        ),
        vec![ActionId::Explore, ActionId::CollectStar, ActionId::Status],
    )
}

/// The exploration site menu with the current energy reading.
pub fn site_menu(energy: u32, cap: u32) -> ActionOutcome {
    ActionOutcome::new(
        format!("Where do you want to explore? Energy: {energy}/{cap} \u{1f43f}\u{fe0f}"),
        vec![
            ActionId::ExploreNorth,
            ActionId::ExploreSouth,
            ActionId::ExploreUnderground,
        ],
    )
}

/// Rejection: not enough energy to explore.
pub fn tired() -> ActionOutcome {
    ActionOutcome::new(
        "Your squirrel is tired! \u{1f634} Wait for energy to recharge.",
        vec![ActionId::Status, ActionId::Help],
    )
}

/// Rejection: the companion is still resting.
pub fn companion_resting(minutes_left: i64) -> ActionOutcome {
    ActionOutcome::new(
        format!(
            "Your squirrel is injured and needs rest! \u{1fa79} \
             Come back in {minutes_left} minutes."
        ),
        vec![ActionId::Status, ActionId::Help],
    )
}

/// A hazard struck during exploration.
pub fn hazard_struck(hazard: Hazard, recovery_hours: i64) -> ActionOutcome {
    ActionOutcome::new(
        format!(
            "Oh no! A {kind} injured your squirrel! \u{1f63f} \
             It can't explore for {recovery_hours} hours.",
            kind = hazard.as_str(),
        ),
        vec![ActionId::Status, ActionId::Help],
    )
}

/// A successful exploration, with the level-up line when earned.
pub fn explore_found(site: ExploreSite, acorns_found: u32, level_up: Option<LevelUp>) -> ActionOutcome {
    let mut message = format!(
        "Your squirrel explored {place} and found {acorns_found} acorns! \u{1f330}\n",
        place = site.display_name(),
    );
    if let Some(reward) = level_up {
        message.push_str(&format!(
            "Congratulations! You leveled up to level {level}! \u{1f389} \
             You got {stars} star and {energy} energy as a reward.\n",
            level = reward.new_level,
            stars = reward.stars_awarded,
            energy = reward.energy_awarded,
        ));
    }
    message.push_str("Explore again?");
    ActionOutcome::new(message, vec![ActionId::Explore])
}

/// Rejection: stars only shine at night.
pub fn daytime(hours_to_night: u64) -> ActionOutcome {
    ActionOutcome::new(
        format!(
            "It's daytime! \u{1f31e} Come back in {hours_to_night} hours \
             for night to collect stars."
        ),
        vec![ActionId::Explore, ActionId::Status],
    )
}

/// Stars are shining; the player picks one.
pub fn stars_offered(visible: u32) -> ActionOutcome {
    ActionOutcome::new(
        format!("{visible} stars are shining in the sky! Which one do you want? \u{2728}"),
        vec![ActionId::CatchStar],
    )
}

/// A star was caught.
pub fn star_caught() -> ActionOutcome {
    ActionOutcome::new(
        "You caught a star! \u{2728} Now you have a better chance of finding acorns!\n\
         Hurry, go explore!",
        vec![ActionId::Explore],
    )
}

/// The full status report.
pub fn status_report(
    record: &PlayerRecord,
    time: &GameTime,
    config: &GameConfig,
    days_per_cycle: u64,
) -> ActionOutcome {
    let next_level_acorns = record.next_level_target(config.leveling.acorns_per_level);
    let squirrel = match record.companion_status {
        CompanionStatus::Healthy => "Healthy",
        CompanionStatus::Injured => "Injured",
    };
    let phase = if time.is_night { "Night" } else { "Day" };
    ActionOutcome::new(
        format!(
            "\u{1f4ca} Your Status:\n\
             Acorns: {acorns}/{next_level_acorns} \u{1f330}\n\
             Stars: {stars} \u{2728}\n\
             Level: {level} \u{1f396}\u{fe0f}\n\
             Energy: {energy}/{cap} \u{26a1}\n\
             Squirrel Status: {squirrel} \u{1f43f}\u{fe0f}\n\
             Trees: {trees} \u{1f333}\n\
             Game Time: {phase} (Day {day}/{days_per_cycle})\n\
             Time to next day/night: {hours} hours",
            acorns = record.acorns,
            stars = record.stars,
            level = record.level,
            energy = record.energy,
            cap = config.energy.cap,
            trees = record.trees.len(),
            day = time.day,
            hours = time.hours_to_cycle_restart(),
        ),
        vec![ActionId::Explore, ActionId::CollectStar, ActionId::Help],
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use oakgrove_types::PlayerId;

    use super::*;

    fn daytime_clock() -> GameTime {
        GameTime {
            day: 3,
            is_night: false,
            secs_to_cycle_restart: 7200,
        }
    }

    #[test]
    fn welcome_greets_by_name_and_reports_the_day() {
        let record = PlayerRecord::new(PlayerId::new(1), Some(String::from("Nika")), Utc::now());
        let outcome = welcome(&record, &daytime_clock(), 13);
        assert!(outcome.message.contains("Nika"));
        assert!(outcome.message.contains("day (Day 3/13)"));
        assert_eq!(outcome.next_actions.len(), 4);
    }

    #[test]
    fn welcome_falls_back_when_no_name_was_given() {
        let record = PlayerRecord::new(PlayerId::new(1), None, Utc::now());
        let outcome = welcome(&record, &daytime_clock(), 13);
        assert!(outcome.message.contains(FALLBACK_NAME));
    }

    #[test]
    fn hazard_message_names_the_hazard() {
        let outcome = hazard_struck(Hazard::Eagle, 2);
        assert!(outcome.message.contains("eagle"));
        assert!(outcome.message.contains("2 hours"));
    }

    #[test]
    fn explore_found_mentions_level_up_only_when_earned() {
        let plain = explore_found(ExploreSite::North, 4, None);
        assert!(plain.message.contains("North"));
        assert!(plain.message.contains("4 acorns"));
        assert!(!plain.message.contains("leveled up"));

        let leveled = explore_found(
            ExploreSite::South,
            6,
            Some(LevelUp {
                new_level: 2,
                stars_awarded: 1,
                energy_awarded: 5,
            }),
        );
        assert!(leveled.message.contains("leveled up to level 2"));
        assert!(leveled.message.contains("1 star and 5 energy"));
    }

    #[test]
    fn status_report_shows_the_next_level_target() {
        let mut record = PlayerRecord::new(PlayerId::new(1), None, Utc::now());
        record.acorns = 47;
        record.level = 1;
        let outcome = status_report(&record, &daytime_clock(), &GameConfig::default(), 13);
        assert!(outcome.message.contains("Acorns: 47/50"));
        assert!(outcome.message.contains("Day (Day 3/13)"));
    }
}
