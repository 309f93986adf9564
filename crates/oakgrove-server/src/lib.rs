//! HTTP action API for the Oakgrove forest game.
//!
//! Every player action arrives as an HTTP request, runs the shared
//! pipeline under that player's lock (fetch, energy regeneration,
//! companion gate, transition, persist), and resolves into an
//! [`ActionOutcome`](oakgrove_types::ActionOutcome): message text plus
//! the enumerated follow-up actions a front end renders as buttons.
//!
//! Precondition rejections (tired, injured companion, daytime star
//! attempt) are ordinary `200` outcomes with explanatory text. Only
//! faults (store errors, unknown players, bad paths) become error
//! responses, and none of them takes the process down.

pub mod error;
pub mod handlers;
pub mod locks;
pub mod messages;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
