//! The display collaborator the panel reports to.

use crate::core::OvenState;
use log::info;

/// Callbacks implemented by the UI.
///
/// Calls are made while the panel lock is held, from either the caller's
/// thread or the countdown worker. Implementations must not call back into
/// the controller; post to the UI's own event loop instead.
pub trait PanelDisplay: Send + Sync {
    /// The `MM:SS` text changed, or the state changed.
    fn refresh(&self, display: &str);

    /// Visual cue for the operating mode (door light, indicator color).
    fn indicator_changed(&self, mode: OvenState);

    /// Countdown reached zero without being stopped.
    fn ping(&self) {
        info!("Ping!");
    }
}

/// Headless display that writes everything to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDisplay;

impl PanelDisplay for LogDisplay {
    fn refresh(&self, display: &str) {
        info!("display {display}");
    }

    fn indicator_changed(&self, mode: OvenState) {
        info!("indicator {mode}");
    }
}
