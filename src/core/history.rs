//! State change history tracking.
//!
//! Only real state changes (the kind differs) are recorded. Records hold
//! kinds, never state or event values, so a history is cheap to keep and
//! serializable whenever the kinds are.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// What caused a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger<E> {
    /// A state-only evaluation step.
    Poll,
    /// An event of the given kind.
    Event(E),
}

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use vfsm::core::{StateTransition, Trigger};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Idle",
///     to: "Run",
///     trigger: Trigger::Event("Start"),
///     sequence: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, Trigger::Event("Start"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<K, E> {
    /// Kind of the outgoing state
    pub from: K,
    /// Kind of the incoming state
    pub to: K,
    /// Poll or the kind of the dispatched event
    pub trigger: Trigger<E>,
    /// 1-based position among every change the engine has made, including
    /// ones already dropped from a bounded history
    pub sequence: u64,
    /// When the change was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded history of state changes.
///
/// Once `limit` records are held, recording another one drops the oldest.
/// A limit of zero disables storage while still counting changes.
///
/// # Example
///
/// ```rust
/// use vfsm::core::{StateHistory, Trigger};
///
/// let mut history: StateHistory<&str, ()> = StateHistory::with_limit(2);
/// history.record("A", "B", Trigger::Poll);
/// history.record("B", "C", Trigger::Poll);
/// history.record("C", "D", Trigger::Poll);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.recorded(), 3);
/// assert_eq!(history.get_path(), vec!["B", "C", "D"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "StoredHistory<K, E>")]
pub struct StateHistory<K, E> {
    transitions: VecDeque<StateTransition<K, E>>,
    limit: usize,
    recorded: u64,
}

/// Wire form of [`StateHistory`]; trimmed to its limit on load.
#[derive(Deserialize)]
struct StoredHistory<K, E> {
    transitions: VecDeque<StateTransition<K, E>>,
    limit: usize,
    recorded: u64,
}

impl<K, E> From<StoredHistory<K, E>> for StateHistory<K, E> {
    fn from(stored: StoredHistory<K, E>) -> Self {
        let mut history = Self {
            transitions: stored.transitions,
            limit: stored.limit,
            recorded: stored.recorded,
        };
        history.keep_newest(history.limit);
        history
    }
}

impl<K, E> StateHistory<K, E> {
    fn keep_newest(&mut self, count: usize) {
        while self.transitions.len() > count {
            self.transitions.pop_front();
        }
    }
}

impl<K: Copy, E: Copy> StateHistory<K, E> {
    /// Create an empty history holding at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit,
            recorded: 0,
        }
    }

    /// Record a change from `from` to `to`, stamped with the current time.
    pub fn record(&mut self, from: K, to: K, trigger: Trigger<E>) {
        self.recorded += 1;
        if self.limit == 0 {
            self.transitions.clear();
            return;
        }
        self.keep_newest(self.limit - 1);
        self.transitions.push_back(StateTransition {
            from,
            to,
            trigger,
            sequence: self.recorded,
            timestamp: Utc::now(),
        });
    }

    /// Retained records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<K, E>> + '_ {
        self.transitions.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&StateTransition<K, E>> {
        self.transitions.back()
    }

    /// Kinds traversed by the retained records: the first record's `from`,
    /// then the `to` of every record.
    pub fn get_path(&self) -> Vec<K> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last retained records.
    ///
    /// Returns `None` when nothing is retained.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Total number of changes ever recorded, retained or not.
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
