//! The structured result handed to the presentation layer.
//!
//! Every action resolves to a message plus the enumerated set of
//! follow-up actions. Precondition rejections (tired companion,
//! daytime star attempt, injured companion) are ordinary outcomes
//! with explanatory text, not errors.

use serde::{Deserialize, Serialize};

use crate::enums::ActionId;

/// A resolved action: message text plus the next available actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// User-facing message describing what happened.
    pub message: String,
    /// Actions the player may take next, in presentation order.
    pub next_actions: Vec<ActionId>,
}

impl ActionOutcome {
    /// Build an outcome from a message and its follow-up actions.
    pub fn new(message: impl Into<String>, next_actions: Vec<ActionId>) -> Self {
        Self {
            message: message.into(),
            next_actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_actions_in_order() {
        let outcome = ActionOutcome::new(
            "Explore again?",
            vec![ActionId::Explore, ActionId::Status],
        );
        let json = serde_json::to_value(&outcome).ok();
        let actions = json
            .as_ref()
            .and_then(|v| v.get("next_actions"))
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions.first().and_then(|v| v.as_str()), Some("explore"));
    }
}
