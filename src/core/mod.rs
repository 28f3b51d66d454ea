//! Pure core of the oven panel.
//!
//! This module contains the side-effect free part of the panel:
//! - The `Idle`/`Cooking` state
//! - Events and the effects a transition requests
//! - The transition table as a pure function
//! - Immutable history tracking
//!
//! The shell in [`crate::effects`] applies the effects.

mod event;
mod history;
mod state;
mod transition;

pub use event::{Effect, EventKind, PanelEvent};
pub use history::{TransitionHistory, TransitionRecord, DEFAULT_HISTORY_LIMIT};
pub use state::OvenState;
pub use transition::{transition, CancelPolicy, Step};
