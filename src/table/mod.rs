//! Rule tables: transition rules and lifecycle hooks.
//!
//! A [`TransitionTable`] replaces an overloaded callable with an explicit
//! registry. Rules are keyed by `(state kind, event kind)` patterns and
//! resolved in tiers; hooks are keyed by state kind and resolved through a
//! fixed fallback chain. Tables are assembled with [`TableBuilder`].

pub mod builder;
pub mod error;
pub mod hooks;
pub mod macros;
pub mod rule;

pub use builder::{RuleBuilder, TableBuilder};
pub use error::BuildError;
pub use hooks::{HookFn, Lifecycle, PeerHookFn};
pub use rule::{BranchFn, EffectFn, Pattern, Shape};

use crate::core::{Event, State};
use hooks::Hooks;
use rule::RuleSet;

/// Picks the rule set (event or polling) a dispatch or registration targets.
pub(crate) type RuleSelector<S, E, C, I> =
    fn(&mut TransitionTable<S, E, C>) -> &mut RuleSet<S, I, C>;

/// Transition rules and hooks for states `S`, events `E` and context `C`.
///
/// The table holds behavior only. The context the rules read and write is
/// owned by the [`Engine`](crate::engine::Engine) and passed to every rule
/// and hook by mutable reference.
pub struct TransitionTable<S: State, E: Event, C> {
    events: RuleSet<S, E, C>,
    polls: RuleSet<S, (), C>,
    pub(crate) hooks: Hooks<S, C>,
}

impl<S: State, E: Event, C> TransitionTable<S, E, C> {
    pub(crate) fn new() -> Self {
        Self {
            events: RuleSet::new(),
            polls: RuleSet::new(),
            hooks: Hooks::new(),
        }
    }

    pub(crate) fn event_rules(&mut self) -> &mut RuleSet<S, E, C> {
        &mut self.events
    }

    pub(crate) fn poll_rules(&mut self) -> &mut RuleSet<S, (), C> {
        &mut self.polls
    }

    /// Shape of the rule that `event` would resolve to in `state`, or
    /// `None` when the combination is unhandled.
    ///
    /// Useful for checking a table's coverage; the engine itself treats an
    /// unhandled combination as a no-op.
    pub fn shape_for_event(&self, state: S::Kind, event: E::Kind) -> Option<Shape> {
        self.events.peek(state, event).map(|rule| rule.shape())
    }

    /// Shape of the polling rule for `state`, or `None` when polling that
    /// state does nothing.
    pub fn shape_for_poll(&self, state: S::Kind) -> Option<Shape> {
        self.polls.peek(state, ()).map(|rule| rule.shape())
    }

    /// Number of event and polling rules.
    pub fn rule_count(&self) -> usize {
        self.events.len() + self.polls.len()
    }

    /// Number of enter and exit hooks, across all forms.
    pub fn hook_count(&self) -> usize {
        self.hooks.enter.len() + self.hooks.exit.len()
    }
}
