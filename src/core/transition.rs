//! The panel transition table as a pure function.

use super::event::{Effect, PanelEvent};
use super::state::OvenState;
use crate::entry::TimeEntry;
use serde::{Deserialize, Serialize};

/// What happens to the entry when `Stop` interrupts cooking.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// Leave the remaining time on the display.
    #[default]
    PreserveEntry,
    /// Zero the entry, as a second `Stop` would.
    ClearEntry,
}

/// Outcome of feeding one event to the state machine.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub next: OvenState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn stay(state: OvenState) -> Self {
        Self {
            next: state,
            effects: Vec::new(),
        }
    }

    fn to(next: OvenState, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }

    /// True when the event was ignored entirely.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Compute the next state and the effects to apply.
///
/// Pure: the entry is only read, for the non-zero guard on `Start`.
///
/// # Example
///
/// ```rust
/// use microwave::core::{transition, CancelPolicy, Effect, OvenState, PanelEvent};
/// use microwave::entry::TimeEntry;
///
/// let entry: TimeEntry = "0005".parse().unwrap();
/// let step = transition(OvenState::Idle, PanelEvent::Start, &entry, CancelPolicy::default());
/// assert_eq!(step.next, OvenState::Cooking);
/// assert!(step.effects.contains(&Effect::LaunchCountdown));
///
/// let zero = TimeEntry::new();
/// let step = transition(OvenState::Idle, PanelEvent::Start, &zero, CancelPolicy::default());
/// assert_eq!(step.next, OvenState::Idle);
/// assert!(step.is_noop());
/// ```
pub fn transition(
    state: OvenState,
    event: PanelEvent,
    entry: &TimeEntry,
    policy: CancelPolicy,
) -> Step {
    use OvenState::{Cooking, Idle};

    match (state, event) {
        (Idle, PanelEvent::Start) if entry.is_zero() => Step::stay(Idle),
        (Idle, PanelEvent::Start) => Step::to(
            Cooking,
            vec![
                Effect::ValidateEntry,
                Effect::LaunchCountdown,
                Effect::Indicator(Cooking),
                Effect::Refresh,
            ],
        ),
        (Idle, PanelEvent::Stop) => Step::to(Idle, vec![Effect::ClearEntry, Effect::Refresh]),
        (Idle, PanelEvent::Digit(d)) => Step::to(Idle, vec![Effect::PushDigit(d), Effect::Refresh]),
        // A worker that lost the race with Stop
        (Idle, PanelEvent::Expired) => Step::stay(Idle),

        (Cooking, PanelEvent::Stop) => {
            let mut effects = vec![Effect::SignalCancel];
            if policy == CancelPolicy::ClearEntry {
                effects.push(Effect::ClearEntry);
            }
            effects.extend([Effect::Indicator(Idle), Effect::Refresh]);
            Step::to(Idle, effects)
        }
        (Cooking, PanelEvent::Start) => Step::stay(Cooking),
        (Cooking, PanelEvent::Digit(_)) => Step::stay(Cooking),
        (Cooking, PanelEvent::Expired) => Step::to(
            Idle,
            vec![Effect::Ping, Effect::Indicator(Idle), Effect::Refresh],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Digit;

    fn entry(s: &str) -> TimeEntry {
        s.parse().unwrap()
    }

    fn digit(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    #[test]
    fn start_with_time_begins_cooking() {
        let step = transition(
            OvenState::Idle,
            PanelEvent::Start,
            &entry("0130"),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Cooking);
        assert_eq!(
            step.effects,
            vec![
                Effect::ValidateEntry,
                Effect::LaunchCountdown,
                Effect::Indicator(OvenState::Cooking),
                Effect::Refresh,
            ]
        );
    }

    #[test]
    fn start_with_zero_entry_is_noop() {
        let step = transition(
            OvenState::Idle,
            PanelEvent::Start,
            &TimeEntry::new(),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert!(step.is_noop());
    }

    #[test]
    fn stop_while_idle_clears_entry() {
        let step = transition(
            OvenState::Idle,
            PanelEvent::Stop,
            &entry("0042"),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert_eq!(step.effects, vec![Effect::ClearEntry, Effect::Refresh]);
    }

    #[test]
    fn digit_while_idle_is_pushed() {
        let step = transition(
            OvenState::Idle,
            PanelEvent::Digit(digit('7')),
            &TimeEntry::new(),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert_eq!(
            step.effects,
            vec![Effect::PushDigit(digit('7')), Effect::Refresh]
        );
    }

    #[test]
    fn stop_while_cooking_preserves_entry_by_default() {
        let step = transition(
            OvenState::Cooking,
            PanelEvent::Stop,
            &entry("1233"),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert_eq!(
            step.effects,
            vec![
                Effect::SignalCancel,
                Effect::Indicator(OvenState::Idle),
                Effect::Refresh,
            ]
        );
    }

    #[test]
    fn stop_while_cooking_can_clear_entry() {
        let step = transition(
            OvenState::Cooking,
            PanelEvent::Stop,
            &entry("1233"),
            CancelPolicy::ClearEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert!(step.effects.contains(&Effect::ClearEntry));
        assert_eq!(step.effects[0], Effect::SignalCancel);
    }

    #[test]
    fn cooking_ignores_start_and_digits() {
        let cooking = entry("0100");
        for event in [PanelEvent::Start, PanelEvent::Digit(digit('3'))] {
            let step = transition(
                OvenState::Cooking,
                event,
                &cooking,
                CancelPolicy::PreserveEntry,
            );
            assert_eq!(step.next, OvenState::Cooking);
            assert!(step.is_noop());
        }
    }

    #[test]
    fn expiry_pings_and_returns_to_idle() {
        let step = transition(
            OvenState::Cooking,
            PanelEvent::Expired,
            &TimeEntry::new(),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert_eq!(step.effects[0], Effect::Ping);
    }

    #[test]
    fn stale_expiry_while_idle_is_ignored() {
        let step = transition(
            OvenState::Idle,
            PanelEvent::Expired,
            &TimeEntry::new(),
            CancelPolicy::PreserveEntry,
        );

        assert_eq!(step.next, OvenState::Idle);
        assert!(step.is_noop());
    }
}
