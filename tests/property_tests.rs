//! Property-based tests for the entry buffer and the transition table.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use microwave::core::{transition, CancelPolicy, Effect, OvenState, PanelEvent};
use microwave::entry::{Digit, TimeEntry, MAX_TOTAL_SECONDS};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(c in proptest::char::range('0', '9')) -> char {
        c
    }
}

prop_compose! {
    fn arbitrary_entry()(digits in prop::collection::vec(arbitrary_digit(), 4)) -> TimeEntry {
        digits.into_iter().collect::<String>().parse().unwrap()
    }
}

prop_compose! {
    fn arbitrary_state()(cooking in any::<bool>()) -> OvenState {
        if cooking { OvenState::Cooking } else { OvenState::Idle }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..4u8, c in arbitrary_digit()) -> PanelEvent {
        match variant {
            0 => PanelEvent::Digit(Digit::try_from(c).unwrap()),
            1 => PanelEvent::Start,
            2 => PanelEvent::Stop,
            _ => PanelEvent::Expired,
        }
    }
}

fn arbitrary_policy() -> impl Strategy<Value = CancelPolicy> {
    prop_oneof![Just(CancelPolicy::PreserveEntry), Just(CancelPolicy::ClearEntry)]
}

proptest! {
    #[test]
    fn validate_is_idempotent(entry in arbitrary_entry()) {
        let once = entry.validated();
        let twice = once.validated();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn validated_entry_is_in_range(entry in arbitrary_entry()) {
        let valid = entry.validated();
        prop_assert!(valid.seconds() <= 59);
        prop_assert!(valid.total_seconds() <= MAX_TOTAL_SECONDS);
        prop_assert_eq!(valid.minutes(), entry.minutes());
    }

    #[test]
    fn validate_never_zeroes_a_nonzero_entry(entry in arbitrary_entry()) {
        prop_assert_eq!(entry.validated().is_zero(), entry.is_zero());
    }

    #[test]
    fn buffer_keeps_last_four_digits(
        digits in prop::collection::vec(arbitrary_digit(), 4..12)
    ) {
        let mut entry = TimeEntry::new();
        for d in &digits {
            entry.push_digit(*d).unwrap();
        }

        let expected: String = digits[digits.len() - 4..].iter().collect();
        prop_assert_eq!(entry.to_string(), expected);
    }

    #[test]
    fn non_digits_are_rejected(c in any::<char>().prop_filter("non-digit", |c| !c.is_ascii_digit())) {
        let mut entry = TimeEntry::new();
        prop_assert!(entry.push_digit(c).is_err());
        prop_assert!(entry.is_zero());
    }

    #[test]
    fn total_seconds_round_trips(n in 0..=MAX_TOTAL_SECONDS) {
        let mut entry = TimeEntry::new();
        entry.set_total_seconds(n);
        prop_assert_eq!(entry.total_seconds(), n);
        prop_assert_eq!(entry.validated(), entry);
    }

    #[test]
    fn display_matches_digits(entry in arbitrary_entry()) {
        let digits = entry.to_string();
        prop_assert_eq!(entry.display(), format!("{}:{}", &digits[..2], &digits[2..]));
    }

    #[test]
    fn start_on_zero_never_transitions(state in arbitrary_state(), policy in arbitrary_policy()) {
        let step = transition(state, PanelEvent::Start, &TimeEntry::new(), policy);
        prop_assert_eq!(step.next, state);
        prop_assert!(step.is_noop());
    }

    #[test]
    fn cooking_ignores_digits(c in arbitrary_digit(), entry in arbitrary_entry(), policy in arbitrary_policy()) {
        let digit = Digit::try_from(c).unwrap();
        let step = transition(OvenState::Cooking, PanelEvent::Digit(digit), &entry, policy);
        prop_assert_eq!(step.next, OvenState::Cooking);
        prop_assert!(step.is_noop());
    }

    #[test]
    fn transition_is_deterministic(
        state in arbitrary_state(),
        event in arbitrary_event(),
        entry in arbitrary_entry(),
        policy in arbitrary_policy()
    ) {
        prop_assert_eq!(
            transition(state, event, &entry, policy),
            transition(state, event, &entry, policy)
        );
    }

    #[test]
    fn launch_only_from_idle_start(
        state in arbitrary_state(),
        event in arbitrary_event(),
        entry in arbitrary_entry(),
        policy in arbitrary_policy()
    ) {
        let step = transition(state, event, &entry, policy);
        if step.effects.contains(&Effect::LaunchCountdown) {
            prop_assert_eq!(state, OvenState::Idle);
            prop_assert_eq!(event, PanelEvent::Start);
            prop_assert!(!entry.is_zero());
            prop_assert_eq!(step.next, OvenState::Cooking);
        }
    }

    #[test]
    fn leaving_cooking_always_updates_indicator(
        event in arbitrary_event(),
        entry in arbitrary_entry(),
        policy in arbitrary_policy()
    ) {
        let step = transition(OvenState::Cooking, event, &entry, policy);
        if step.next == OvenState::Idle {
            prop_assert!(step.effects.contains(&Effect::Indicator(OvenState::Idle)));
            prop_assert_eq!(step.effects.last(), Some(&Effect::Refresh));
        }
    }
}
