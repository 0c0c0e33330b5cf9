//! Core traits for state machine states and events.
//!
//! States and events are closed, payload-free enumerations with
//! equality-only semantics. They are deliberately separate traits:
//! a state is never dispatched as an event or vice versa.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are immutable values that describe the current position in a
/// state machine. The engine only ever compares and copies them.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are small payload-free enum variants compared
///   against transition tables
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so callers
///   can snapshot them
///
/// The [`state_enum!`](crate::state_enum) macro derives all of this for a
/// plain enum declaration.
///
/// # Example
///
/// ```rust
/// use tactile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum ValveState {
///     Closed,
///     Opening,
///     Open,
/// }
///
/// impl State for ValveState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(ValveState::Opening.name(), "Opening");
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &'static str;
}

/// Trait for state machine events.
///
/// Events carry no payload; they are pure occurrence markers matched
/// against transition tables by equality. The
/// [`event_enum!`](crate::event_enum) macro derives the requirements for a
/// plain enum declaration.
///
/// # Example
///
/// ```rust
/// use tactile::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum ValveEvent {
///     Commanded,
///     LimitReached,
/// }
///
/// impl Event for ValveEvent {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Commanded => "Commanded",
///             Self::LimitReached => "LimitReached",
///         }
///     }
/// }
///
/// assert_eq!(ValveEvent::Commanded.name(), "Commanded");
/// ```
pub trait Event:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &'static str;
}
