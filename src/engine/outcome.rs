//! Dispatch outcomes.

/// Result of a single `poll` or `process_event` call.
///
/// `K` is the state kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<K> {
    /// The state kind changed; exit and enter hooks ran.
    Transitioned { from: K, to: K },

    /// A rule produced a state of the current kind; no hooks ran.
    Stayed { state: K },

    /// A side-effect rule ran; the state was left alone.
    Handled,

    /// No rule matched. Nothing ran.
    Unhandled,
}

impl<K> Outcome<K> {
    /// Whether any rule matched and ran.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled)
    }

    /// Whether the state kind changed.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}
