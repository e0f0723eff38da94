//! Transition rules and tiered resolution.

use crate::core::{Event, State};
use crate::table::error::BuildError;
use std::collections::HashMap;

/// Action run by deterministic and side-effect rules.
pub type EffectFn<S, I, C> = Box<dyn FnMut(&mut C, &S, &I) + Send>;

/// Body of a branching rule; the returned state is the next state.
pub type BranchFn<S, I, C> = Box<dyn FnMut(&mut C, &S, &I) -> S + Send>;

/// Input combination a rule accepts.
///
/// For poll rules the input kind is `()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern<S, I> {
    /// One state kind with one input kind.
    Exact(S, I),
    /// Any state with one input kind.
    AnyState(I),
    /// One state kind with any input.
    AnyInput(S),
    /// Any state with any input.
    Anything,
}

/// Result shape of a matched rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Always produces the same state kind.
    Deterministic,
    /// Picks the next state when invoked.
    Branching,
    /// Runs for its effect only; the state is left alone.
    SideEffect,
}

pub(crate) enum Action<S, I, C> {
    Goto {
        target: S,
        action: Option<EffectFn<S, I, C>>,
    },
    Branch(BranchFn<S, I, C>),
    Effect(EffectFn<S, I, C>),
}

/// What a fired rule asks the engine to commit.
pub(crate) enum Fired<S> {
    Next(S),
    Effect,
}

pub(crate) struct Rule<S: State, I: Event, C> {
    pub(crate) pattern: Pattern<S::Kind, I::Kind>,
    action: Action<S, I, C>,
}

impl<S: State, I: Event, C> Rule<S, I, C> {
    pub(crate) fn new(pattern: Pattern<S::Kind, I::Kind>, action: Action<S, I, C>) -> Self {
        Self { pattern, action }
    }

    pub(crate) fn shape(&self) -> Shape {
        match self.action {
            Action::Goto { .. } => Shape::Deterministic,
            Action::Branch(_) => Shape::Branching,
            Action::Effect(_) => Shape::SideEffect,
        }
    }

    pub(crate) fn fire(&mut self, context: &mut C, state: &S, input: &I) -> Fired<S> {
        match &mut self.action {
            Action::Goto { target, action } => {
                if let Some(action) = action {
                    action(context, state, input);
                }
                Fired::Next(target.clone())
            }
            Action::Branch(branch) => Fired::Next(branch(context, state, input)),
            Action::Effect(effect) => {
                effect(context, state, input);
                Fired::Effect
            }
        }
    }
}

/// Rules for one input type, split into resolution tiers.
///
/// Lookup goes exact, then any-state, then any-input, then the catch-all.
/// The first tier holding a rule wins; lower tiers are never consulted.
pub(crate) struct RuleSet<S: State, I: Event, C> {
    exact: HashMap<(S::Kind, I::Kind), Rule<S, I, C>>,
    any_state: HashMap<I::Kind, Rule<S, I, C>>,
    any_input: HashMap<S::Kind, Rule<S, I, C>>,
    anything: Option<Rule<S, I, C>>,
}

impl<S: State, I: Event, C> RuleSet<S, I, C> {
    pub(crate) fn new() -> Self {
        Self {
            exact: HashMap::new(),
            any_state: HashMap::new(),
            any_input: HashMap::new(),
            anything: None,
        }
    }

    pub(crate) fn insert(&mut self, rule: Rule<S, I, C>) -> Result<(), BuildError> {
        let pattern = rule.pattern;
        let occupied = match pattern {
            Pattern::Exact(state, input) => self.exact.insert((state, input), rule).is_some(),
            Pattern::AnyState(input) => self.any_state.insert(input, rule).is_some(),
            Pattern::AnyInput(state) => self.any_input.insert(state, rule).is_some(),
            Pattern::Anything => self.anything.replace(rule).is_some(),
        };
        if occupied {
            return Err(BuildError::DuplicateRule {
                pattern: format!("{pattern:?}"),
            });
        }
        Ok(())
    }

    pub(crate) fn resolve(&mut self, state: S::Kind, input: I::Kind) -> Option<&mut Rule<S, I, C>> {
        let Self {
            exact,
            any_state,
            any_input,
            anything,
        } = self;
        exact
            .get_mut(&(state, input))
            .or_else(move || any_state.get_mut(&input))
            .or_else(move || any_input.get_mut(&state))
            .or_else(move || anything.as_mut())
    }

    pub(crate) fn peek(&self, state: S::Kind, input: I::Kind) -> Option<&Rule<S, I, C>> {
        self.exact
            .get(&(state, input))
            .or_else(|| self.any_state.get(&input))
            .or_else(|| self.any_input.get(&state))
            .or(self.anything.as_ref())
    }

    pub(crate) fn len(&self) -> usize {
        self.exact.len()
            + self.any_state.len()
            + self.any_input.len()
            + usize::from(self.anything.is_some())
    }
}
