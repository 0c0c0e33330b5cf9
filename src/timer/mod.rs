//! Cooperative single-shot countdown timer.
//!
//! The timer never runs in the background: the owner polls
//! [`tick`](OneshotTimer::tick) at its own cadence against a caller-supplied
//! monotonic clock accessor. Per arm, the expiry callback fires at most
//! once, on the first tick at or past the deadline.

use std::fmt;

/// Timestamp and duration unit for timers.
///
/// Ticks are opaque: milliseconds, microseconds, or anything else the
/// clock accessor counts in. Arithmetic wraps at the type's period, which
/// must match the clock's own wraparound.
pub type Ticks = u64;

/// Zero-argument monotonic clock accessor.
///
/// Must be non-decreasing modulo wraparound; clock regression is undefined
/// behavior inherited from the wraparound assumption.
pub type ClockFn = Box<dyn Fn() -> Ticks>;

/// Expiry callback.
///
/// The timer hands itself back, already disarmed, so the callback may
/// re-arm or cancel without corrupting the firing step. `C` is the
/// caller's strongly-typed context.
pub type ExpiryFn<C> = fn(&mut OneshotTimer<C>, &mut C);

/// Single countdown that fires its callback exactly once per arm.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tactile::timer::OneshotTimer;
///
/// fn expired(_timer: &mut OneshotTimer<u32>, fires: &mut u32) {
///     *fires += 1;
/// }
///
/// let now = Rc::new(Cell::new(0u64));
/// let clock = Rc::clone(&now);
/// let mut timer = OneshotTimer::new(expired, Box::new(move || clock.get()));
/// let mut fires = 0u32;
///
/// timer.arm(10);
/// timer.tick(&mut fires); // too early
/// assert_eq!(fires, 0);
///
/// now.set(10);
/// timer.tick(&mut fires); // deadline reached
/// timer.tick(&mut fires); // already fired, stays quiet
/// assert_eq!(fires, 1);
/// ```
pub struct OneshotTimer<C: ?Sized> {
    duration: Ticks,
    started_at: Ticks,
    armed: bool,
    on_expiry: ExpiryFn<C>,
    clock: ClockFn,
}

impl<C: ?Sized> OneshotTimer<C> {
    /// Create a disarmed timer with its callback and clock accessor.
    pub fn new(on_expiry: ExpiryFn<C>, clock: ClockFn) -> Self {
        Self {
            duration: 0,
            started_at: 0,
            armed: false,
            on_expiry,
            clock,
        }
    }

    /// Start the countdown: `duration` ticks from now.
    ///
    /// Arming with duration 0 makes the next tick fire unconditionally.
    /// Re-arming an active timer restarts it.
    pub fn arm(&mut self, duration: Ticks) {
        self.started_at = (self.clock)();
        self.duration = duration;
        self.armed = true;
    }

    /// Check the deadline, firing the callback if it has passed.
    ///
    /// No-op while disarmed. The armed flag clears *before* the callback
    /// runs, so a re-arm from inside the callback is observed on the next
    /// tick only. The elapsed-time subtraction wraps, matching the clock's
    /// own period.
    pub fn tick(&mut self, ctx: &mut C) {
        if !self.armed {
            return;
        }
        let elapsed = (self.clock)().wrapping_sub(self.started_at);
        if elapsed >= self.duration {
            self.armed = false;
            let fire = self.on_expiry;
            fire(self, ctx);
        }
    }

    /// Stop the countdown without firing; idempotent.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Check whether the timer is counting down.
    pub fn is_active(&self) -> bool {
        self.armed
    }

    /// Ticks left until the deadline; 0 while disarmed.
    ///
    /// May be negative when the deadline has passed but `tick` has not yet
    /// observed it — callers must not assume non-negativity.
    pub fn time_remaining(&self) -> i64 {
        if !self.armed {
            return 0;
        }
        let elapsed = (self.clock)().wrapping_sub(self.started_at);
        self.duration as i64 - elapsed as i64
    }
}

impl<C: ?Sized> fmt::Debug for OneshotTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneshotTimer")
            .field("duration", &self.duration)
            .field("started_at", &self.started_at)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}
