//! Panel transition history.
//!
//! Provides an immutable, bounded log of the events the panel handled,
//! useful for diagnostics and for UIs that show recent activity.

use super::event::EventKind;
use super::state::OvenState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of records kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single handled event.
///
/// # Example
///
/// ```rust
/// use microwave::core::{EventKind, OvenState, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: OvenState::Idle,
///     to: OvenState::Cooking,
///     event: EventKind::Start,
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_state());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State before the event
    pub from: OvenState,
    /// State after the event
    pub to: OvenState,
    /// The event that was handled
    pub event: EventKind,
    /// When the event was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn new(from: OvenState, to: OvenState, event: EventKind) -> Self {
        Self {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, bounded history of handled events.
///
/// History is immutable - `record` returns a new history with the record
/// appended, dropping the oldest records past the limit.
///
/// # Example
///
/// ```rust
/// use microwave::core::{EventKind, OvenState, TransitionHistory, TransitionRecord};
///
/// let history = TransitionHistory::with_limit(2);
/// let history = history
///     .record(TransitionRecord::new(OvenState::Idle, OvenState::Cooking, EventKind::Start))
///     .record(TransitionRecord::new(OvenState::Cooking, OvenState::Idle, EventKind::Stop))
///     .record(TransitionRecord::new(OvenState::Idle, OvenState::Idle, EventKind::Stop));
///
/// assert_eq!(history.transitions().len(), 2);
/// assert_eq!(history.transitions()[0].event, EventKind::Stop);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: Vec<TransitionRecord>,
    limit: usize,
}

impl Default for TransitionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionHistory {
    /// Create an empty history with [`DEFAULT_HISTORY_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history keeping at most `limit` records (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record an event, returning a new history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let skip = (self.records.len() + 1).saturating_sub(self.limit);
        let mut records: Vec<_> = self.records.iter().skip(skip).cloned().collect();
        records.push(record);
        Self {
            records,
            limit: self.limit,
        }
    }

    /// States traversed, collapsing events that did not change state.
    ///
    /// Starts with the `from` state of the oldest kept record.
    pub fn get_path(&self) -> Vec<OvenState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in self.records.iter().filter(|r| r.changed_state()) {
            path.push(record.to);
        }
        path
    }

    /// Elapsed time between the oldest and newest kept record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of completed cooks (expiries) in the kept records.
    pub fn completed_cycles(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.event == EventKind::Expired && r.changed_state())
            .count()
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
