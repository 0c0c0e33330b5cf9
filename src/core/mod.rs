//! Core state machine types and logic.
//!
//! This module contains the pure core of the engine:
//! - State and event definitions via the `State` and `Event` traits
//! - The single-slot pending-event buffer
//! - Table-driven transition and behavior dispatch
//!
//! Nothing in this module touches a clock or performs I/O; side effects
//! live in the callbacks the caller registers in its behavior tables.

mod machine;
mod slot;
mod state;

pub use machine::{entry_for, next_state, Behavior, EntryFn, StateMachine, Transition};
pub use slot::EventSlot;
pub use state::{Event, State};
