//! State and event identity.
//!
//! The engine never compares state values. It compares *kinds*: two states
//! with the same kind are interchangeable as far as dispatch and lifecycle
//! hooks are concerned, even when they carry different payloads.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state type is usually an enum whose variants form the closed set the
/// machine can occupy. `Kind` identifies the variant; for unit-only enums
/// the enum itself is a perfectly good kind (see [`state_enum!`](crate::state_enum)).
///
/// # Example
///
/// ```rust
/// use vfsm::core::State;
///
/// #[derive(Clone, Debug)]
/// enum Door {
///     Open,
///     Closed { locked: bool },
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorKind {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     type Kind = DoorKind;
///
///     fn kind(&self) -> DoorKind {
///         match self {
///             Self::Open => DoorKind::Open,
///             Self::Closed { .. } => DoorKind::Closed,
///         }
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed { .. } => "Closed",
///         }
///     }
/// }
///
/// let a = Door::Closed { locked: true };
/// let b = Door::Closed { locked: false };
/// assert_eq!(a.kind(), b.kind());
/// ```
pub trait State: Clone + Debug {
    /// Identity of a state "type". Rules and hooks are keyed by it.
    type Kind: Copy + Eq + Hash + Debug;

    /// The kind of this state value.
    fn kind(&self) -> Self::Kind;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for values dispatched against the current state.
///
/// Events are opaque to the engine apart from their kind, which is used as
/// the second half of the dispatch key. The engine never keeps an event
/// after the dispatch call returns.
pub trait Event: Debug {
    /// Identity of an event "type".
    type Kind: Copy + Eq + Hash + Debug;

    /// The kind of this event value.
    fn kind(&self) -> Self::Kind;
}

/// Polling is dispatch of the unit input.
impl Event for () {
    type Kind = ();

    fn kind(&self) -> Self::Kind {}
}
