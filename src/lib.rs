//! Microwave: the control core of a microwave oven panel
//!
//! The crate follows a "pure core, imperative shell" layout. The transition
//! table is a pure function over `Idle`/`Cooking`, and the shell applies its
//! effects: keypad entry, a cancellable one-tick-per-second countdown on a
//! background thread, and display callbacks into the UI.
//!
//! # Core Concepts
//!
//! - **Entry**: the 4-digit `mm:ss` keypad buffer with clamping
//! - **Transitions**: `(state, event) -> (state, effects)`, no side effects
//! - **Controller**: applies effects and owns the countdown worker
//! - **History**: immutable, bounded record of handled events
//!
//! # Example
//!
//! ```rust
//! use microwave::config::PanelConfig;
//! use microwave::core::OvenState;
//! use microwave::effects::{ManualTicker, OvenController, PanelDisplay};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Quiet;
//!
//! impl PanelDisplay for Quiet {
//!     fn refresh(&self, _display: &str) {}
//!     fn indicator_changed(&self, _mode: OvenState) {}
//! }
//!
//! let ticker = Arc::new(ManualTicker::new());
//! let oven = OvenController::with_ticker(Arc::new(Quiet), ticker.clone(), PanelConfig::default())
//!     .unwrap();
//!
//! for d in ['1', '3', '0'] {
//!     oven.press_digit(d).unwrap();
//! }
//! oven.press_start();
//! assert_eq!(oven.state(), OvenState::Cooking);
//!
//! // Let one tick elapse, then wait until the worker parks in the next one.
//! assert!(ticker.wait_for_sleeps(1, Duration::from_secs(5)));
//! ticker.advance();
//! assert!(ticker.wait_for_sleeps(2, Duration::from_secs(5)));
//! assert_eq!(oven.current_display(), "01:29");
//!
//! oven.press_stop();
//! ticker.free_run();
//! oven.shutdown();
//! assert_eq!(oven.current_display(), "01:29");
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod entry;

// Re-export commonly used types
pub use config::PanelConfig;
pub use crate::core::{OvenState, PanelEvent};
pub use effects::{OvenController, PanelDisplay};
pub use entry::{EntryError, TimeEntry};
