//! Property-based tests for the core engine types.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tactile::core::{next_state, Behavior, EventSlot, StateMachine, Transition};
use tactile::{event_enum, state_enum};

state_enum! {
    enum TestState {
        Init,
        S0,
        S1,
        S2,
    }
}

event_enum! {
    enum TestEvent {
        Boot,
        E1,
        E2,
        E3,
    }
}

const TRANSITIONS: &[Transition<TestState, TestEvent>] = &[
    Transition { from: TestState::Init, on: TestEvent::Boot, to: TestState::S0 },
    Transition { from: TestState::S0, on: TestEvent::E1, to: TestState::S0 },
    Transition { from: TestState::S0, on: TestEvent::E2, to: TestState::S1 },
    Transition { from: TestState::S1, on: TestEvent::E1, to: TestState::S2 },
    Transition { from: TestState::S2, on: TestEvent::E2, to: TestState::S0 },
];

fn record_entry(_m: &mut StateMachine<TestState, TestEvent>, entries: &mut u32) {
    *entries += 1;
}

const BEHAVIORS: &[Behavior<TestState, TestEvent, u32>] = &[
    Behavior { state: TestState::S0, on_entry: record_entry },
    Behavior { state: TestState::S1, on_entry: record_entry },
    Behavior { state: TestState::S2, on_entry: record_entry },
];

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TestState {
        match variant {
            0 => TestState::Init,
            1 => TestState::S0,
            2 => TestState::S1,
            _ => TestState::S2,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..4u8) -> TestEvent {
        match variant {
            0 => TestEvent::Boot,
            1 => TestEvent::E1,
            2 => TestEvent::E2,
            _ => TestEvent::E3,
        }
    }
}

proptest! {
    #[test]
    fn slot_keeps_only_the_last_event(events in prop::collection::vec(arbitrary_event(), 1..16)) {
        let mut slot = EventSlot::new();
        for event in &events {
            slot.put(*event);
        }

        prop_assert_eq!(slot.take(), events.last().copied());
        prop_assert!(slot.is_empty());
    }

    #[test]
    fn absent_pairs_never_change_state_or_fire_behaviors(
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        prop_assume!(next_state(TRANSITIONS, state, event).is_none());

        let mut machine = StateMachine::new(state);
        let mut entries = 0u32;

        machine.enqueue(event);
        machine.tick(TRANSITIONS, BEHAVIORS, &mut entries);

        prop_assert_eq!(machine.state(), state);
        prop_assert_eq!(entries, 0);
    }

    #[test]
    fn lookup_is_deterministic(state in arbitrary_state(), event in arbitrary_event()) {
        let first = next_state(TRANSITIONS, state, event);
        let second = next_state(TRANSITIONS, state, event);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tick_consumes_the_pending_event(state in arbitrary_state(), event in arbitrary_event()) {
        let mut machine = StateMachine::new(state);
        let mut entries = 0u32;

        machine.enqueue(event);
        machine.tick(TRANSITIONS, BEHAVIORS, &mut entries);

        // Matched or dropped, the slot is clear afterwards.
        prop_assert!(!machine.has_pending());
    }

    #[test]
    fn a_tick_performs_at_most_one_transition(
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let mut machine = StateMachine::new(state);
        let mut entries = 0u32;

        machine.enqueue(event);
        machine.tick(TRANSITIONS, BEHAVIORS, &mut entries);

        prop_assert!(entries <= 1);
        match next_state(TRANSITIONS, state, event) {
            Some(expected) => prop_assert_eq!(machine.state(), expected),
            None => prop_assert_eq!(machine.state(), state),
        }
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(
            tactile::core::State::name(&state),
            tactile::core::State::name(&state)
        );
    }

    #[test]
    fn states_round_trip_through_serde(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, back);
    }
}
