//! Tick sources for the countdown.
//!
//! The countdown never calls `thread::sleep` directly; it asks a [`Ticker`].
//! [`RealTicker`] sleeps for real, [`InstantTicker`] fast-forwards, and
//! [`ManualTicker`] holds every tick until it is released, so a caller can
//! interleave commands with ticks deterministically.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// Blocking wait of one countdown tick.
pub trait Ticker: Send + Sync {
    fn sleep(&self, tick: Duration);
}

/// Sleeps the calling thread for the full tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTicker;

impl Ticker for RealTicker {
    fn sleep(&self, tick: Duration) {
        thread::sleep(tick);
    }
}

/// Returns immediately; a whole countdown runs as fast as the lock allows.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantTicker;

impl Ticker for InstantTicker {
    fn sleep(&self, _tick: Duration) {
        thread::yield_now();
    }
}

#[derive(Debug, Default)]
struct TickCounts {
    started: usize,
    released: usize,
    free_running: bool,
}

/// Lock-step ticker.
///
/// Each `sleep` call blocks until [`ManualTicker::advance`] releases it.
/// [`ManualTicker::wait_for_sleeps`] lets the driver wait until the worker is
/// parked in a given tick before issuing the next command.
///
/// # Example
///
/// ```rust
/// use microwave::effects::{ManualTicker, Ticker};
/// use std::sync::Arc;
/// use std::thread;
/// use std::time::Duration;
///
/// let ticker = Arc::new(ManualTicker::new());
/// let worker = {
///     let ticker = Arc::clone(&ticker);
///     thread::spawn(move || ticker.sleep(Duration::from_secs(1)))
/// };
///
/// assert!(ticker.wait_for_sleeps(1, Duration::from_secs(5)));
/// ticker.advance();
/// worker.join().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ManualTicker {
    counts: Mutex<TickCounts>,
    changed: Condvar,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    fn counts(&self) -> MutexGuard<'_, TickCounts> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Release one pending (or the next) tick.
    pub fn advance(&self) {
        self.counts().released += 1;
        self.changed.notify_all();
    }

    /// Release every pending tick and stop blocking future ones.
    pub fn free_run(&self) {
        self.counts().free_running = true;
        self.changed.notify_all();
    }

    /// Number of `sleep` calls made so far.
    pub fn sleeps(&self) -> usize {
        self.counts().started
    }

    /// Block until at least `n` sleeps have started, or `timeout` passes.
    ///
    /// Returns `false` on timeout.
    pub fn wait_for_sleeps(&self, n: usize, timeout: Duration) -> bool {
        let (counts, _) = self
            .changed
            .wait_timeout_while(self.counts(), timeout, |c| c.started < n)
            .unwrap_or_else(PoisonError::into_inner);
        counts.started >= n
    }
}

impl Ticker for ManualTicker {
    fn sleep(&self, _tick: Duration) {
        let mut counts = self.counts();
        counts.started += 1;
        let ticket = counts.started;
        self.changed.notify_all();

        let _released = self
            .changed
            .wait_while(counts, |c| c.released < ticket && !c.free_running)
            .unwrap_or_else(PoisonError::into_inner);
    }
}
