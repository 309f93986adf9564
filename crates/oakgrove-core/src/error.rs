//! Error types for the simulation core.
//!
//! Precondition failures (tired companion, daytime star attempt,
//! injured companion) are not errors; they are ordinary outcome
//! variants. Errors here are genuine faults in a computation.

/// Errors that can occur during a player state transition.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// An arithmetic overflow occurred while updating a counter.
    #[error("arithmetic overflow in game transition: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
