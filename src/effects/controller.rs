//! Oven controller: applies transitions and owns the countdown worker.

use super::clock::{RealTicker, Ticker};
use super::countdown::Countdown;
use super::display::PanelDisplay;
use crate::config::{ConfigError, PanelConfig};
use crate::core::{
    transition, CancelPolicy, Effect, OvenState, PanelEvent, TransitionHistory, TransitionRecord,
};
use crate::entry::{Digit, EntryError, TimeEntry};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

/// Panel data guarded by one lock, shared with the countdown worker.
pub(crate) struct Panel {
    pub(crate) state: OvenState,
    pub(crate) entry: TimeEntry,
    pub(crate) history: TransitionHistory,
    /// Set on launch, cleared by the worker as it exits.
    pub(crate) counting: bool,
}

pub(crate) struct Shared {
    panel: Mutex<Panel>,
    exited: Condvar,
    cancel: AtomicBool,
    pub(crate) display: Arc<dyn PanelDisplay>,
    policy: CancelPolicy,
}

impl Shared {
    pub(crate) fn lock(&self) -> MutexGuard<'_, Panel> {
        // Every mutation writes a complete value, so a poisoned panel is still consistent.
        self.panel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Called once by the countdown worker on its way out.
    pub(crate) fn worker_exited(&self) {
        self.lock().counting = false;
        self.exited.notify_all();
    }

    fn wait_for_exit(&self) {
        let mut panel = self.lock();
        while panel.counting {
            panel = self
                .exited
                .wait(panel)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Run `event` through the transition table and apply its effects.
    ///
    /// Returns true when the step asked for a countdown to be launched.
    pub(crate) fn apply(&self, panel: &mut Panel, event: PanelEvent) -> bool {
        let from = panel.state;
        let step = transition(from, event, &panel.entry, self.policy);
        if step.is_noop() {
            debug!("{:?} ignored while {from}", event.kind());
            return false;
        }

        panel.state = step.next;
        let mut launch = false;
        for effect in &step.effects {
            match *effect {
                Effect::PushDigit(d) => panel.entry.push(d),
                Effect::ClearEntry => panel.entry.clear(),
                Effect::ValidateEntry => panel.entry.validate(),
                Effect::LaunchCountdown => launch = true,
                Effect::SignalCancel => self.cancel.store(true, Ordering::SeqCst),
                Effect::Ping => self.display.ping(),
                Effect::Indicator(mode) => self.display.indicator_changed(mode),
                Effect::Refresh => self.display.refresh(&panel.entry.display()),
            }
        }

        debug!("{:?}: {from} -> {}", event.kind(), step.next);
        panel.history = panel
            .history
            .record(TransitionRecord::new(from, step.next, event.kind()));
        launch
    }
}

#[derive(Default)]
struct WorkerSlot {
    handle: Option<JoinHandle<()>>,
    shut_down: bool,
}

impl WorkerSlot {
    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("countdown worker panicked");
            }
        }
    }
}

/// Point-in-time view of the panel for UI bridges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub state: OvenState,
    pub entry: TimeEntry,
    pub display: String,
}

/// Control core of one oven.
///
/// Commands (`press_*`, `shutdown`) are serialized against each other; the
/// countdown worker shares only the panel lock with them.
///
/// # Example
///
/// ```rust
/// use microwave::config::PanelConfig;
/// use microwave::core::OvenState;
/// use microwave::effects::{InstantTicker, LogDisplay, OvenController};
/// use std::sync::Arc;
///
/// let oven = OvenController::with_ticker(
///     Arc::new(LogDisplay),
///     Arc::new(InstantTicker),
///     PanelConfig::default(),
/// )
/// .unwrap();
///
/// oven.press_digit('3').unwrap();
/// assert_eq!(oven.current_display(), "00:03");
///
/// oven.press_start();
/// oven.wait_for_countdown();
/// assert_eq!(oven.state(), OvenState::Idle);
/// assert_eq!(oven.current_display(), "00:00");
/// oven.shutdown();
/// ```
pub struct OvenController {
    shared: Arc<Shared>,
    worker: Mutex<WorkerSlot>,
    ticker: Arc<dyn Ticker>,
    tick: Duration,
}

impl OvenController {
    /// Controller ticking in real time, one tick per `config.tick_millis`.
    pub fn new(display: Arc<dyn PanelDisplay>, config: PanelConfig) -> Result<Self, ConfigError> {
        Self::with_ticker(display, Arc::new(RealTicker), config)
    }

    /// Controller with a caller-supplied tick source.
    pub fn with_ticker(
        display: Arc<dyn PanelDisplay>,
        ticker: Arc<dyn Ticker>,
        config: PanelConfig,
    ) -> Result<Self, ConfigError> {
        config.check()?;

        let panel = Panel {
            state: OvenState::Idle,
            entry: TimeEntry::new(),
            history: TransitionHistory::with_limit(config.history_limit),
            counting: false,
        };
        display.refresh(&panel.entry.display());

        Ok(Self {
            shared: Arc::new(Shared {
                panel: Mutex::new(panel),
                exited: Condvar::new(),
                cancel: AtomicBool::new(false),
                display,
                policy: config.cancel_policy,
            }),
            worker: Mutex::new(WorkerSlot::default()),
            ticker,
            tick: config.tick(),
        })
    }

    fn worker(&self) -> MutexGuard<'_, WorkerSlot> {
        self.worker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Keypad digit. Ignored while cooking.
    ///
    /// A character outside `'0'..='9'` is a caller bug and is rejected in
    /// every state.
    pub fn press_digit(&self, d: char) -> Result<(), EntryError> {
        let digit = Digit::try_from(d)?;
        let _worker = self.worker();
        let mut panel = self.shared.lock();
        self.shared.apply(&mut panel, PanelEvent::Digit(digit));
        Ok(())
    }

    /// Start cooking the entered time. No-op on a zero entry or while cooking.
    pub fn press_start(&self) {
        let mut worker = self.worker();
        if worker.shut_down {
            debug!("start ignored after shutdown");
            return;
        }

        let mut panel = self.shared.lock();
        if !panel.state.is_cooking() && panel.counting {
            debug!("start ignored until the previous countdown winds down");
            return;
        }

        // The previous worker has signalled its exit and holds no lock.
        worker.join();
        if !self.shared.apply(&mut panel, PanelEvent::Start) {
            return;
        }

        self.shared.cancel.store(false, Ordering::SeqCst);
        panel.counting = true;
        let countdown = Countdown {
            shared: Arc::clone(&self.shared),
            ticker: Arc::clone(&self.ticker),
            tick: self.tick,
            total_seconds: panel.entry.total_seconds(),
        };

        match countdown.spawn() {
            Ok(handle) => {
                info!("cooking {}", panel.entry.display());
                worker.handle = Some(handle);
            }
            Err(e) => {
                error!("failed to spawn countdown worker: {e}");
                panel.counting = false;
                self.shared.apply(&mut panel, PanelEvent::Stop);
            }
        }
    }

    /// Stop cooking, or clear the entry when already idle.
    pub fn press_stop(&self) {
        let _worker = self.worker();
        let mut panel = self.shared.lock();
        let was_cooking = panel.state.is_cooking();
        self.shared.apply(&mut panel, PanelEvent::Stop);
        if was_cooking {
            info!("stopped at {}", panel.entry.display());
        }
    }

    /// Panel text, `"MM:SS"`.
    pub fn current_display(&self) -> String {
        self.shared.lock().entry.display()
    }

    pub fn state(&self) -> OvenState {
        self.shared.lock().state
    }

    pub fn entry(&self) -> TimeEntry {
        self.shared.lock().entry
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        let panel = self.shared.lock();
        PanelSnapshot {
            state: panel.state,
            entry: panel.entry,
            display: panel.entry.display(),
        }
    }

    pub fn history(&self) -> TransitionHistory {
        self.shared.lock().history.clone()
    }

    /// True from launch until the countdown worker has signalled its exit.
    pub fn is_counting_down(&self) -> bool {
        self.shared.lock().counting
    }

    /// Block until the current countdown worker, if any, has exited.
    ///
    /// The worker exits on its own when the time runs out; call
    /// [`OvenController::press_stop`] first to end it early.
    ///
    /// Other commands stay available while waiting. The worker handle is
    /// left in place and joined by the next launch or by `shutdown`.
    pub fn wait_for_countdown(&self) {
        self.shared.wait_for_exit();
    }

    /// Stop any active countdown and wait for the worker to exit.
    ///
    /// Further `press_start` calls are ignored afterwards. Idempotent.
    pub fn shutdown(&self) {
        let mut worker = self.worker();
        if !worker.shut_down {
            debug!("shutting down oven panel");
            worker.shut_down = true;
        }

        {
            let mut panel = self.shared.lock();
            if panel.state.is_cooking() {
                self.shared.apply(&mut panel, PanelEvent::Stop);
            }
        }

        worker.join();
    }
}

impl Drop for OvenController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
