//! Panel events and the effects a transition asks the shell to perform.

use super::state::OvenState;
use crate::entry::Digit;
use serde::{Deserialize, Serialize};

/// Input to the state machine.
///
/// `Digit`, `Start` and `Stop` come from the keypad; `Expired` is raised by
/// the countdown worker when it reaches zero on its own.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelEvent {
    Digit(Digit),
    Start,
    Stop,
    Expired,
}

impl PanelEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Digit(_) => EventKind::Digit,
            Self::Start => EventKind::Start,
            Self::Stop => EventKind::Stop,
            Self::Expired => EventKind::Expired,
        }
    }
}

/// Payload-free event tag, kept in the transition history.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum EventKind {
    Digit,
    Start,
    Stop,
    Expired,
}

/// Side effect requested by a transition.
///
/// Effects are listed in the order the shell must apply them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    /// Shift a digit into the entry.
    PushDigit(Digit),
    /// Reset the entry to `0000`.
    ClearEntry,
    /// Clamp the entry's seconds field before cooking.
    ValidateEntry,
    /// Spawn the countdown worker.
    LaunchCountdown,
    /// Ask the running countdown worker to exit.
    SignalCancel,
    /// Completion signal.
    Ping,
    /// Door/indicator cue changed.
    Indicator(OvenState),
    /// Redraw the `MM:SS` text.
    Refresh,
}
