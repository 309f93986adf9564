//! Simulation core for the Oakgrove forest game.
//!
//! Two pieces live here:
//!
//! - The **forest clock** ([`clock`]): a stateless mapping from
//!   wall-clock time to the repeating 13-day forest cycle.
//! - The **player transitions** ([`energy`], [`companion`],
//!   [`explore`], [`stars`]): deterministic or weighted-random rules
//!   mutating a single [`PlayerRecord`](oakgrove_types::PlayerRecord).
//!
//! Everything is a pure function of its inputs plus an injected random
//! number generator. Persistence and transport are the caller's
//! concern; the caller is also responsible for serializing actions per
//! player so that the multi-step read-modify-write transitions never
//! interleave.

pub mod clock;
pub mod companion;
pub mod config;
pub mod energy;
pub mod error;
pub mod explore;
pub mod stars;

pub use clock::{ClockError, ForestClock, GameTime};
pub use companion::{CompanionCheck, check_companion};
pub use config::{ConfigError, GameConfig};
pub use energy::{apply_regen, regenerate};
pub use error::GameError;
pub use explore::{ExploreOutcome, LevelUp, explore, roll_hazard};
pub use stars::{StarOutcome, catch_star, collect_stars};
