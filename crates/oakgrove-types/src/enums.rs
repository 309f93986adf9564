//! Enumeration types for the Oakgrove forest game.
//!
//! Companion status and exploration sites also round-trip through
//! their string forms: the status is stored as `TEXT` in Postgres and
//! the site arrives as a URL path segment. Unknown strings are typed
//! errors, not panics.

use serde::{Deserialize, Serialize};

/// Errors raised when parsing domain enumerations from strings.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A stored companion status string did not match a known variant.
    #[error("unknown companion status: {0}")]
    UnknownCompanionStatus(String),

    /// An exploration site string did not match a known variant.
    #[error("unknown exploration site: {0}")]
    UnknownExploreSite(String),
}

/// Health state of a player's companion squirrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionStatus {
    /// The companion can explore.
    Healthy,
    /// The companion was hurt by a hazard and is resting.
    Injured,
}

impl CompanionStatus {
    /// Lowercase string form used for database storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Injured => "injured",
        }
    }

    /// Parse the database string form.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnknownCompanionStatus`] for any string
    /// other than `healthy` or `injured`.
    pub fn parse(value: &str) -> Result<Self, TypeError> {
        match value {
            "healthy" => Ok(Self::Healthy),
            "injured" => Ok(Self::Injured),
            other => Err(TypeError::UnknownCompanionStatus(other.to_owned())),
        }
    }
}

/// An adverse event that can strike during exploration.
///
/// Hazards are evaluated in a fixed priority order with independent
/// probability draws; the first successful draw wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hazard {
    /// A fox attacks the companion.
    Fox,
    /// An eagle swoops down on the companion.
    Eagle,
    /// A storm batters the forest.
    Storm,
}

impl Hazard {
    /// Lowercase name used in user-facing messages ("A fox injured...").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Eagle => "eagle",
            Self::Storm => "storm",
        }
    }
}

/// One of the three fixed sub-locations a player may explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExploreSite {
    /// North of the tree.
    North,
    /// South of the tree.
    South,
    /// Underground, among the roots.
    Underground,
}

impl ExploreSite {
    /// Capitalized display name used in outcome messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::Underground => "Underground",
        }
    }

    /// Parse a lowercase path segment (`north`, `south`, `underground`).
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnknownExploreSite`] for any other string.
    pub fn parse(value: &str) -> Result<Self, TypeError> {
        match value {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "underground" => Ok(Self::Underground),
            other => Err(TypeError::UnknownExploreSite(other.to_owned())),
        }
    }

    /// All sites, in the order they are offered to the player.
    pub const fn all() -> [Self; 3] {
        [Self::North, Self::South, Self::Underground]
    }
}

/// Identifier for a follow-up action offered to the player.
///
/// The enumerated set of next actions in an [`ActionOutcome`](crate::ActionOutcome)
/// is the button-keyboard equivalent: the front end renders one control
/// per entry and routes the player's choice back as this identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    /// Open the exploration site menu.
    Explore,
    /// Explore north of the tree.
    ExploreNorth,
    /// Explore south of the tree.
    ExploreSouth,
    /// Explore underground.
    ExploreUnderground,
    /// Look for stars (night only).
    CollectStar,
    /// Catch one of the offered stars.
    CatchStar,
    /// Show the player status report.
    Status,
    /// Show the game guide.
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companion_status_roundtrip() {
        for status in [CompanionStatus::Healthy, CompanionStatus::Injured] {
            let parsed = CompanionStatus::parse(status.as_str());
            assert_eq!(parsed.ok(), Some(status));
        }
    }

    #[test]
    fn companion_status_rejects_unknown() {
        assert!(CompanionStatus::parse("sleepy").is_err());
    }

    #[test]
    fn site_parse_matches_path_segments() {
        assert_eq!(ExploreSite::parse("north").ok(), Some(ExploreSite::North));
        assert_eq!(ExploreSite::parse("south").ok(), Some(ExploreSite::South));
        assert_eq!(
            ExploreSite::parse("underground").ok(),
            Some(ExploreSite::Underground)
        );
        assert!(ExploreSite::parse("East").is_err());
    }

    #[test]
    fn action_id_serializes_kebab_case() {
        let json = serde_json::to_string(&ActionId::CollectStar).ok();
        assert_eq!(json.as_deref(), Some("\"collect-star\""));
    }
}
