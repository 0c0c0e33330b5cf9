//! Debounced digital-input ("button") abstraction.
//!
//! Composes one [`StateMachine`] and one [`OneshotTimer`] with statically
//! declared tables to turn raw boolean samples into a debounced press
//! notification. Only the press edge is debounced: `Pressed` is reached
//! after the press was already confirmed stable, so a low sample while
//! pressed is treated as authoritative and releases immediately.
//!
//! Per-poll flow inside [`EventButton::update`]: the raw sample is
//! enqueued as a level event, the timer is ticked (a same-poll expiry
//! overwrites the level event in the machine's single slot), and the
//! machine is ticked last. This ordering is part of the contract.

use std::fmt;

use crate::core::{Behavior, StateMachine, Transition};
use crate::timer::{ClockFn, OneshotTimer, Ticks};
use crate::{event_enum, state_enum};

state_enum! {
    /// Debounce states of a button input.
    pub enum ButtonState {
        /// Stable low; waiting for a press edge.
        Released,
        /// First high sample seen; press reported, not yet confirmed.
        Pressing,
        /// High samples accumulating until the debounce interval elapses.
        DebouncingPress,
        /// Press confirmed stable.
        Pressed,
    }
}

event_enum! {
    /// Events feeding the button's state machine.
    pub enum ButtonEvent {
        /// Raw sample read low.
        Low,
        /// Raw sample read high.
        High,
        /// The debounce timer expired.
        TimerExpired,
    }
}

/// Capability surface the button's entry behaviors dispatch through.
///
/// A strongly-typed handle to the owning button replaces opaque-pointer
/// callback payloads: behaviors see exactly these two operations and
/// nothing else of the button's internals.
pub trait ButtonHooks {
    /// Report the press to the user callback.
    fn notify_press(&mut self);
    /// Start the debounce countdown if one is not already running.
    fn begin_debounce(&mut self);
}

type Machine = StateMachine<ButtonState, ButtonEvent>;

// Alias pins the trait object's lifetime to 'static so the table's fn
// pointers and the tick call site agree on one context type.
type Hooks = dyn ButtonHooks;

/// Canonical debounce table. Declaration order is the tie-break rule.
const TRANSITIONS: &[Transition<ButtonState, ButtonEvent>] = &[
    Transition { from: ButtonState::Released, on: ButtonEvent::High, to: ButtonState::Pressing },
    Transition { from: ButtonState::Pressing, on: ButtonEvent::High, to: ButtonState::DebouncingPress },
    Transition { from: ButtonState::DebouncingPress, on: ButtonEvent::High, to: ButtonState::DebouncingPress },
    Transition { from: ButtonState::DebouncingPress, on: ButtonEvent::TimerExpired, to: ButtonState::Pressed },
    Transition { from: ButtonState::Pressed, on: ButtonEvent::Low, to: ButtonState::Released },
];

fn enter_pressing(_machine: &mut Machine, hooks: &mut Hooks) {
    hooks.notify_press();
}

fn enter_debouncing(_machine: &mut Machine, hooks: &mut Hooks) {
    hooks.begin_debounce();
}

const BEHAVIORS: &[Behavior<ButtonState, ButtonEvent, Hooks>] = &[
    Behavior { state: ButtonState::Pressing, on_entry: enter_pressing },
    Behavior { state: ButtonState::DebouncingPress, on_entry: enter_debouncing },
];

fn debounce_expired(_timer: &mut OneshotTimer<Machine>, machine: &mut Machine) {
    let _ = machine.enqueue(ButtonEvent::TimerExpired);
}

/// Imperative shell of the button: the timer and the user callback.
///
/// Kept apart from the machine so a machine tick can borrow the machine
/// mutably while behaviors mutate the shell through [`ButtonHooks`].
struct ButtonShell {
    timer: OneshotTimer<Machine>,
    interval: Ticks,
    notify: Box<dyn FnMut()>,
}

impl ButtonHooks for ButtonShell {
    fn notify_press(&mut self) {
        (self.notify)();
    }

    fn begin_debounce(&mut self) {
        // The DebouncingPress self-loop re-enters this behavior on every
        // high poll; arming unconditionally would restart the interval
        // each time and the press would never confirm.
        if !self.timer.is_active() {
            self.timer.arm(self.interval);
        }
    }
}

/// Debounced button over a polled raw input line.
///
/// Constructed once with a fixed debounce interval, a user notification
/// callback, and a monotonic clock accessor; lives for the process
/// lifetime. The press is reported on the very first high sample (entering
/// `Pressing`) and confirmed once the line has been seen high for the
/// debounce interval; release needs no confirmation.
///
/// Single execution context assumed: every entry point runs synchronously
/// to completion, and no callback needs to be `Send`.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tactile::button::{ButtonState, EventButton};
///
/// let now = Rc::new(Cell::new(0u64));
/// let presses = Rc::new(Cell::new(0u32));
///
/// let clock = Rc::clone(&now);
/// let count = Rc::clone(&presses);
/// let mut button = EventButton::new(3, move || count.set(count.get() + 1), move || clock.get());
///
/// for t in 0..6 {
///     now.set(t);
///     button.update(true);
/// }
///
/// assert_eq!(presses.get(), 1);
/// assert_eq!(button.state(), ButtonState::Pressed);
/// ```
pub struct EventButton {
    machine: Machine,
    shell: ButtonShell,
}

impl EventButton {
    /// Create a button with its debounce interval, user notification
    /// callback, and clock accessor.
    ///
    /// The interval is in the clock's own tick unit.
    pub fn new(
        interval: Ticks,
        notify: impl FnMut() + 'static,
        clock: impl Fn() -> Ticks + 'static,
    ) -> Self {
        Self::from_parts(interval, Box::new(notify), Box::new(clock))
    }

    pub(crate) fn from_parts(interval: Ticks, notify: Box<dyn FnMut()>, clock: ClockFn) -> Self {
        Self {
            machine: StateMachine::new(ButtonState::Released),
            shell: ButtonShell {
                timer: OneshotTimer::new(debounce_expired, clock),
                interval,
                notify,
            },
        }
    }

    /// Feed one raw sample of the input line.
    ///
    /// The level event is enqueued unconditionally, even when unchanged
    /// since the previous poll. A timer expiry detected on this same poll
    /// overwrites it in the machine's single-slot buffer; the machine then
    /// dispatches whichever event survived. Total: never signals an error.
    pub fn update(&mut self, level: bool) {
        let raw = if level { ButtonEvent::High } else { ButtonEvent::Low };
        let _ = self.machine.enqueue(raw);
        self.shell.timer.tick(&mut self.machine);
        self.machine
            .tick(TRANSITIONS, BEHAVIORS, &mut self.shell as &mut Hooks);
    }

    /// Current debounce state, for caller-added instrumentation.
    pub fn state(&self) -> ButtonState {
        self.machine.state()
    }

    /// Whether the debounce countdown is currently running.
    pub fn debouncing(&self) -> bool {
        self.shell.timer.is_active()
    }
}

impl fmt::Debug for EventButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventButton")
            .field("machine", &self.machine)
            .field("timer", &self.shell.timer)
            .field("interval", &self.shell.interval)
            .finish_non_exhaustive()
    }
}
