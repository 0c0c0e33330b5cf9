//! Macros for declaring state and event enumerations.

/// Generate a [`State`](crate::core::State) implementation for a simple enum.
///
/// Derives `Copy`, `Eq`, `Debug` and the serde traits, and implements
/// `name()` from the variant identifiers.
///
/// # Example
///
/// ```
/// use tactile::state_enum;
/// use tactile::core::State;
///
/// state_enum! {
///     pub enum DoorState {
///         Closed,
///         Opening,
///         Open,
///     }
/// }
///
/// assert_eq!(DoorState::Opening.name(), "Opening");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an [`Event`](crate::core::Event) implementation for a simple enum.
///
/// Companion to [`state_enum!`]; identical derives, implements the
/// [`Event`](crate::core::Event) trait instead.
///
/// # Example
///
/// ```
/// use tactile::event_enum;
/// use tactile::core::Event;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Commanded,
///         LimitHit,
///     }
/// }
///
/// assert_eq!(DoorEvent::LimitHit.name(), "LimitHit");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            One,
            Two,
        }
    }

    event_enum! {
        enum TestEvent {
            Tick,
            Tock,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::One.name(), "One");
        assert_eq!(TestState::Two.name(), "Two");
        assert_eq!(TestState::One, TestState::One);
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Tick.name(), "Tick");
        assert_eq!(TestEvent::Tock.name(), "Tock");
    }

    #[test]
    fn macro_enums_support_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
    }
}
