//! Build errors for the button builder.

use thiserror::Error;

/// Errors that can occur when building an [`EventButton`](crate::button::EventButton).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Debounce interval not specified. Call .interval(ticks) before .build()")]
    MissingInterval,

    #[error("Notification callback not specified. Call .notify(callback) before .build()")]
    MissingNotify,

    #[error("Clock accessor not specified. Call .clock(accessor) before .build()")]
    MissingClock,
}
