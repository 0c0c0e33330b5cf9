//! Builder API for ergonomic button construction.
//!
//! A thin fluent layer over [`EventButton::new`](crate::button::EventButton::new)
//! that reports missing configuration as typed errors instead of relying on
//! argument order.

pub mod error;

pub use error::BuildError;

use crate::button::EventButton;
use crate::timer::{ClockFn, Ticks};

/// Builder for [`EventButton`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use tactile::builder::EventButtonBuilder;
///
/// let button = EventButtonBuilder::new()
///     .interval(50)
///     .notify(|| println!("pressed"))
///     .clock(|| 0)
///     .build()
///     .unwrap();
/// # let _ = button;
/// ```
pub struct EventButtonBuilder {
    interval: Option<Ticks>,
    notify: Option<Box<dyn FnMut()>>,
    clock: Option<ClockFn>,
}

impl EventButtonBuilder {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self {
            interval: None,
            notify: None,
            clock: None,
        }
    }

    /// Set the debounce interval, in the clock's tick unit (required).
    pub fn interval(mut self, ticks: Ticks) -> Self {
        self.interval = Some(ticks);
        self
    }

    /// Set the user notification callback (required).
    pub fn notify(mut self, callback: impl FnMut() + 'static) -> Self {
        self.notify = Some(Box::new(callback));
        self
    }

    /// Set the monotonic clock accessor (required).
    pub fn clock(mut self, accessor: impl Fn() -> Ticks + 'static) -> Self {
        self.clock = Some(Box::new(accessor));
        self
    }

    /// Build the button.
    /// Returns an error naming the first missing field.
    pub fn build(self) -> Result<EventButton, BuildError> {
        let interval = self.interval.ok_or(BuildError::MissingInterval)?;
        let notify = self.notify.ok_or(BuildError::MissingNotify)?;
        let clock = self.clock.ok_or(BuildError::MissingClock)?;

        Ok(EventButton::from_parts(interval, notify, clock))
    }
}

impl Default for EventButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonState;

    #[test]
    fn build_with_all_fields_succeeds() {
        let button = EventButtonBuilder::new()
            .interval(10)
            .notify(|| {})
            .clock(|| 0)
            .build()
            .unwrap();

        assert_eq!(button.state(), ButtonState::Released);
    }

    #[test]
    fn missing_interval_is_reported() {
        let result = EventButtonBuilder::new().notify(|| {}).clock(|| 0).build();
        assert!(matches!(result, Err(BuildError::MissingInterval)));
    }

    #[test]
    fn missing_notify_is_reported() {
        let result = EventButtonBuilder::new().interval(10).clock(|| 0).build();
        assert!(matches!(result, Err(BuildError::MissingNotify)));
    }

    #[test]
    fn missing_clock_is_reported() {
        let result = EventButtonBuilder::new().interval(10).notify(|| {}).build();
        assert!(matches!(result, Err(BuildError::MissingClock)));
    }

    #[test]
    fn error_messages_name_the_setter() {
        let err = EventButtonBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains(".interval(ticks)"));
    }

    #[test]
    fn zero_interval_is_accepted() {
        // Duration 0 is legal timer semantics, not a configuration error.
        assert!(EventButtonBuilder::new()
            .interval(0)
            .notify(|| {})
            .clock(|| 0)
            .build()
            .is_ok());
    }
}
