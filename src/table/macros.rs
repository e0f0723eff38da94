//! Macros for declaring unit-variant states and events.

/// Declare a unit-variant enum and implement [`State`](crate::core::State)
/// for it, using the enum itself as its kind.
///
/// # Example
///
/// ```
/// use vfsm::core::State;
/// use vfsm::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// assert_eq!(WorkflowState::Done.kind(), WorkflowState::Done);
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
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            type Kind = Self;

            fn kind(&self) -> Self {
                *self
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a unit-variant enum and implement [`Event`](crate::core::Event)
/// for it, using the enum itself as its kind.
///
/// Events with payloads implement the trait by hand.
///
/// # Example
///
/// ```
/// use vfsm::core::Event;
/// use vfsm::event_enum;
///
/// event_enum! {
///     pub enum Command {
///         Start,
///         Stop,
///     }
/// }
///
/// assert_eq!(Command::Stop.kind(), Command::Stop);
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
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            type Kind = Self;

            fn kind(&self) -> Self {
                *self
            }
        }
    };
}
