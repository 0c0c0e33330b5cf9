//! Tactile: table-driven state machines for debounced polled inputs
//!
//! Tactile separates a pure core from an imperative shell. The core is a
//! generic state machine engine dispatching against statically declared
//! transition and behavior tables, plus a single-slot pending-event
//! buffer; the shell is a cooperative oneshot timer and the user's
//! callbacks. The two compose into [`EventButton`], which turns raw
//! boolean samples from a polled input line into a debounced press
//! notification.
//!
//! # Core Concepts
//!
//! - **States and events**: closed payload-free enumerations via the
//!   [`State`](core::State) and [`Event`](core::Event) traits
//! - **Tables**: ordered constant [`Transition`](core::Transition) and
//!   [`Behavior`](core::Behavior) records; first declaration-order match
//!   wins
//! - **Single-slot buffer**: at most one event is pending between ticks,
//!   and a newer enqueue overwrites an unconsumed one by design
//! - **Cooperative timing**: nothing runs in the background; one execution
//!   context polls every component at its own cadence
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tactile::EventButton;
//!
//! let now = Rc::new(Cell::new(0u64));
//! let presses = Rc::new(Cell::new(0u32));
//!
//! let clock = Rc::clone(&now);
//! let count = Rc::clone(&presses);
//! let mut button = EventButton::new(3, move || count.set(count.get() + 1), move || clock.get());
//!
//! // The press is reported on the first high sample and confirmed once
//! // the line has stayed high for the debounce interval.
//! for t in 0..6 {
//!     now.set(t);
//!     button.update(true);
//! }
//! assert_eq!(presses.get(), 1);
//! ```

pub mod builder;
pub mod button;
pub mod core;
mod macros;
pub mod timer;

// Re-export commonly used types
pub use crate::builder::{BuildError, EventButtonBuilder};
pub use crate::button::{ButtonEvent, ButtonHooks, ButtonState, EventButton};
pub use crate::core::{Behavior, Event, EventSlot, State, StateMachine, Transition};
pub use crate::timer::{ClockFn, OneshotTimer, Ticks};
