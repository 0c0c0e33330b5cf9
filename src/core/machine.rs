//! Table-driven state machine engine.
//!
//! The engine holds a current state and a single-slot pending event, and
//! dispatches against externally supplied transition and behavior tables.
//! Tables are ordered constant records: the first entry matching wins, so
//! declaration order is the tie-break rule and later duplicates are
//! unreachable.

use super::slot::EventSlot;
use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry behavior callback.
///
/// Invoked synchronously when the machine transitions into the behavior's
/// state. The machine passes itself back so the behavior may enqueue a
/// follow-up event (dispatched on the next tick); `C` is the caller's
/// strongly-typed context.
pub type EntryFn<S, E, C> = fn(&mut StateMachine<S, E>, &mut C);

/// Immutable transition record: in state `from`, event `on` moves the
/// machine to state `to`.
///
/// Held in statically declared ordered slices. When several entries share
/// `(from, on)`, the first in declaration order wins.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// State this transition starts from.
    pub from: S,
    /// Event that triggers it.
    pub on: E,
    /// State the machine moves to.
    pub to: S,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Check whether this entry applies to `(state, event)`.
    pub fn matches(&self, state: S, event: E) -> bool {
        self.from == state && self.on == event
    }
}

/// Immutable behavior record: entering `state` invokes `on_entry`.
///
/// First matching entry per state wins if duplicated. The callback is a
/// plain `fn` pointer so behavior tables can live in `const` items.
pub struct Behavior<S: State, E: Event, C: ?Sized> {
    /// State whose entry triggers the callback.
    pub state: S,
    /// Callback invoked on entry.
    pub on_entry: EntryFn<S, E, C>,
}

impl<S: State, E: Event, C: ?Sized> Clone for Behavior<S, E, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: State, E: Event, C: ?Sized> Copy for Behavior<S, E, C> {}

impl<S: State, E: Event, C: ?Sized> fmt::Debug for Behavior<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Find the destination for `(current, event)`: first declaration-order
/// match, or `None` when the pair is absent from the table.
pub fn next_state<S: State, E: Event>(
    transitions: &[Transition<S, E>],
    current: S,
    event: E,
) -> Option<S> {
    transitions
        .iter()
        .find(|t| t.matches(current, event))
        .map(|t| t.to)
}

/// Find the entry callback registered for `state`: first declaration-order
/// match, or `None` when the state has no behavior.
pub fn entry_for<S: State, E: Event, C: ?Sized>(
    behaviors: &[Behavior<S, E, C>],
    state: S,
) -> Option<EntryFn<S, E, C>> {
    behaviors
        .iter()
        .find(|b| b.state == state)
        .map(|b| b.on_entry)
}

/// State machine instance: a current state plus one pending-event slot.
///
/// The machine owns no tables; transition and behavior tables are passed
/// into [`tick`](StateMachine::tick) explicitly, so one machine type can be
/// driven by different statically declared tables.
///
/// # Example
///
/// ```rust
/// use tactile::core::{Behavior, StateMachine, Transition};
/// use tactile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp { Off, On }
/// }
///
/// event_enum! {
///     enum Toggle { Flip }
/// }
///
/// const TRANSITIONS: &[Transition<Lamp, Toggle>] = &[
///     Transition { from: Lamp::Off, on: Toggle::Flip, to: Lamp::On },
///     Transition { from: Lamp::On, on: Toggle::Flip, to: Lamp::Off },
/// ];
///
/// fn count_on(_machine: &mut StateMachine<Lamp, Toggle>, hits: &mut u32) {
///     *hits += 1;
/// }
///
/// const BEHAVIORS: &[Behavior<Lamp, Toggle, u32>] =
///     &[Behavior { state: Lamp::On, on_entry: count_on }];
///
/// let mut machine = StateMachine::new(Lamp::Off);
/// let mut hits = 0u32;
///
/// machine.enqueue(Toggle::Flip);
/// machine.tick(TRANSITIONS, BEHAVIORS, &mut hits);
///
/// assert_eq!(machine.state(), Lamp::On);
/// assert_eq!(hits, 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StateMachine<S: State, E: Event> {
    state: S,
    pending: EventSlot<E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in `initial` with nothing pending.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            pending: EventSlot::new(),
        }
    }

    /// Get the current state.
    pub fn state(&self) -> S {
        self.state
    }

    /// Check whether an event is buffered for the next tick.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Buffer `event` for the next tick, returning any displaced
    /// unconsumed event.
    ///
    /// The slot holds exactly one event: enqueueing over an unconsumed
    /// event silently discards the older one. This overwrite is the
    /// intended arbitration between producers within one poll cycle.
    pub fn enqueue(&mut self, event: E) -> Option<E> {
        self.pending.put(event)
    }

    /// Dispatch the pending event, performing at most one transition.
    ///
    /// No-op when nothing is pending. Otherwise the event is taken out of
    /// the slot *before* any callback runs, so an entry behavior may
    /// enqueue a new event without it being clobbered by this same call.
    ///
    /// The first transition in declaration order matching
    /// `(current state, event)` wins; with no match the event is silently
    /// dropped and the state is unchanged. After a transition the first
    /// behavior declared for the new state runs synchronously with the
    /// machine and `ctx`; a state without a behavior invokes nothing.
    pub fn tick<C: ?Sized>(
        &mut self,
        transitions: &[Transition<S, E>],
        behaviors: &[Behavior<S, E, C>],
        ctx: &mut C,
    ) {
        let Some(event) = self.pending.take() else {
            return;
        };
        let Some(next) = next_state(transitions, self.state, event) else {
            return;
        };
        self.state = next;
        if let Some(entry) = entry_for(behaviors, next) {
            entry(self, ctx);
        }
    }
}
