//! Background countdown worker.

use super::clock::Ticker;
use super::controller::Shared;
use crate::core::PanelEvent;
use log::{debug, info};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// One countdown run, owned by its worker thread.
pub(crate) struct Countdown {
    pub(crate) shared: Arc<Shared>,
    pub(crate) ticker: Arc<dyn Ticker>,
    pub(crate) tick: Duration,
    pub(crate) total_seconds: u32,
}

/// Clears the panel's `counting` flag when the worker leaves `run`,
/// including by unwinding out of a display callback.
struct ExitSignal<'a>(&'a Shared);

impl Drop for ExitSignal<'_> {
    fn drop(&mut self) {
        self.0.worker_exited();
    }
}

impl Countdown {
    pub(crate) fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("oven-countdown".to_string())
            .spawn(move || self.run())
    }

    /// Tick down to zero unless cancelled.
    ///
    /// Every decrement happens under the panel lock after re-checking the
    /// cancel flag and the state, so a stop is observed at the next wake-up
    /// at the latest and never overwritten.
    fn run(self) {
        let _exit = ExitSignal(&self.shared);
        let mut remaining = self.total_seconds;
        debug!("countdown started with {remaining}s");

        loop {
            if remaining > 0 {
                self.ticker.sleep(self.tick);
            }

            let mut panel = self.shared.lock();
            if self.shared.is_cancelled() || !panel.state.is_cooking() {
                debug!("countdown cancelled at {}", panel.entry.display());
                return;
            }

            if remaining > 0 {
                remaining -= 1;
                panel.entry.set_total_seconds(remaining);
                self.shared.display.refresh(&panel.entry.display());
                debug!("tick {}", panel.entry.display());
            }

            if remaining == 0 {
                info!("cooking complete");
                self.shared.apply(&mut panel, PanelEvent::Expired);
                return;
            }
        }
    }
}
