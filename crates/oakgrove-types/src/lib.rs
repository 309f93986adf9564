//! Shared type definitions for the Oakgrove forest game.
//!
//! This crate holds the types every other crate speaks: the player
//! identifier, the player record, the domain enumerations (companion
//! status, hazards, exploration sites), and the structured action
//! outcome returned to the presentation layer. No logic lives here
//! beyond trivial constructors and string conversions.

pub mod enums;
pub mod ids;
pub mod outcome;
pub mod player;

pub use enums::{ActionId, CompanionStatus, ExploreSite, Hazard, TypeError};
pub use ids::PlayerId;
pub use outcome::ActionOutcome;
pub use player::PlayerRecord;
