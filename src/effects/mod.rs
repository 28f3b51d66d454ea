//! Imperative shell around the pure core.
//!
//! This module applies the effects computed by [`crate::core::transition`]:
//! it mutates the entry, talks to the UI through [`PanelDisplay`], and runs
//! the countdown on a background thread paced by a [`Ticker`].
//!
//! # Key Concepts
//!
//! - **Controller**: serializes keypad commands and owns the worker handle
//! - **Countdown**: at most one worker per controller, cancelled cooperatively
//! - **Tickers**: real, instant, or lock-step manual time

mod clock;
mod controller;
mod countdown;
mod display;

pub use clock::{InstantTicker, ManualTicker, RealTicker, Ticker};
pub use controller::{OvenController, PanelSnapshot};
pub use display::{LogDisplay, PanelDisplay};
