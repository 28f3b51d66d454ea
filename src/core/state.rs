//! Oven operating state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating mode of the oven.
///
/// There is no terminal state: the panel alternates between `Idle` and
/// `Cooking` for as long as it runs.
///
/// # Example
///
/// ```rust
/// use microwave::core::OvenState;
///
/// let state = OvenState::default();
/// assert_eq!(state, OvenState::Idle);
/// assert_eq!(state.name(), "Idle");
/// assert!(!state.is_cooking());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum OvenState {
    #[default]
    Idle,
    Cooking,
}

impl OvenState {
    /// State name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Cooking => "Cooking",
        }
    }

    pub fn is_cooking(&self) -> bool {
        matches!(self, Self::Cooking)
    }
}

impl fmt::Display for OvenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(OvenState::Idle.name(), "Idle");
        assert_eq!(OvenState::Cooking.name(), "Cooking");
        assert_eq!(OvenState::Cooking.to_string(), "Cooking");
    }

    #[test]
    fn initial_state_is_idle() {
        assert_eq!(OvenState::default(), OvenState::Idle);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = OvenState::Cooking;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Cooking\"");
        let deserialized: OvenState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
