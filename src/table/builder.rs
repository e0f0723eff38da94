//! Fluent builder for transition tables.

use crate::core::{Event, State};
use crate::table::error::BuildError;
use crate::table::rule::{Action, Pattern, Rule};
use crate::table::{RuleSelector, TransitionTable};

/// Builder for assembling a [`TransitionTable`].
///
/// Rule registration starts with a pattern method (`on`, `on_any_state`,
/// `on_any_event`, `on_anything`, `poll`, `poll_any`) and ends with a shape
/// method on the returned [`RuleBuilder`] (`goto`, `goto_with`, `branch`,
/// `effect`). Hooks are registered directly.
///
/// The first conflicting registration is remembered and reported by
/// [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use vfsm::table::TableBuilder;
/// use vfsm::{event_enum, state_enum};
///
/// state_enum! {
///     pub enum Phase {
///         Idle,
///         Run,
///         Finish,
///     }
/// }
///
/// event_enum! {
///     pub enum Command {
///         Start,
///         Stop,
///         Reset,
///     }
/// }
///
/// let table = TableBuilder::<Phase, Command, bool>::new()
///     .on(Phase::Idle, Command::Start)
///     .goto_with(Phase::Run, |running, _, _| *running = true)
///     .on(Phase::Run, Command::Stop)
///     .goto(Phase::Finish)
///     .on_any_state(Command::Reset)
///     .goto(Phase::Idle)
///     .poll(Phase::Run)
///     .branch(|running, _, _| if *running { Phase::Run } else { Phase::Finish })
///     .build()
///     .unwrap();
///
/// assert_eq!(table.rule_count(), 4);
/// ```
pub struct TableBuilder<S: State, E: Event, C> {
    table: TransitionTable<S, E, C>,
    error: Option<BuildError>,
}

impl<S: State, E: Event, C> TableBuilder<S, E, C> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::new(),
            error: None,
        }
    }

    /// Rule for one state kind receiving one event kind.
    pub fn on(self, state: S::Kind, event: E::Kind) -> RuleBuilder<S, E, C, E> {
        self.rule(TransitionTable::event_rules, Pattern::Exact(state, event))
    }

    /// Rule for any state receiving one event kind.
    pub fn on_any_state(self, event: E::Kind) -> RuleBuilder<S, E, C, E> {
        self.rule(TransitionTable::event_rules, Pattern::AnyState(event))
    }

    /// Rule for one state kind receiving any event.
    pub fn on_any_event(self, state: S::Kind) -> RuleBuilder<S, E, C, E> {
        self.rule(TransitionTable::event_rules, Pattern::AnyInput(state))
    }

    /// Rule for any state receiving any event.
    pub fn on_anything(self) -> RuleBuilder<S, E, C, E> {
        self.rule(TransitionTable::event_rules, Pattern::Anything)
    }

    /// Polling rule for one state kind.
    pub fn poll(self, state: S::Kind) -> RuleBuilder<S, E, C, ()> {
        self.rule(TransitionTable::poll_rules, Pattern::Exact(state, ()))
    }

    /// Polling rule for any state.
    pub fn poll_any(self) -> RuleBuilder<S, E, C, ()> {
        self.rule(TransitionTable::poll_rules, Pattern::AnyState(()))
    }

    fn rule<I: Event>(
        self,
        select: RuleSelector<S, E, C, I>,
        pattern: Pattern<S::Kind, I::Kind>,
    ) -> RuleBuilder<S, E, C, I> {
        RuleBuilder {
            builder: self,
            select,
            pattern,
        }
    }

    /// Enter hook receiving only the incoming state.
    pub fn on_enter<F>(mut self, state: S::Kind, hook: F) -> Self
    where
        F: FnMut(&mut C, &S) + Send + 'static,
    {
        let result = self.table.hooks.enter.insert_plain(state, Box::new(hook));
        self.keep_first_error(result);
        self
    }

    /// Enter hook receiving the incoming state and the state being left.
    pub fn on_enter_from<F>(mut self, state: S::Kind, hook: F) -> Self
    where
        F: FnMut(&mut C, &S, &S) + Send + 'static,
    {
        let result = self.table.hooks.enter.insert_peer(state, Box::new(hook));
        self.keep_first_error(result);
        self
    }

    /// Enter hook used only when arriving from `from`.
    pub fn on_enter_from_kind<F>(mut self, state: S::Kind, from: S::Kind, hook: F) -> Self
    where
        F: FnMut(&mut C, &S, &S) + Send + 'static,
    {
        let result = self
            .table
            .hooks
            .enter
            .insert_peer_kind(state, from, Box::new(hook));
        self.keep_first_error(result);
        self
    }

    /// Exit hook receiving only the outgoing state.
    pub fn on_exit<F>(mut self, state: S::Kind, hook: F) -> Self
    where
        F: FnMut(&mut C, &S) + Send + 'static,
    {
        let result = self.table.hooks.exit.insert_plain(state, Box::new(hook));
        self.keep_first_error(result);
        self
    }

    /// Exit hook receiving the outgoing state and the state being entered.
    pub fn on_exit_to<F>(mut self, state: S::Kind, hook: F) -> Self
    where
        F: FnMut(&mut C, &S, &S) + Send + 'static,
    {
        let result = self.table.hooks.exit.insert_peer(state, Box::new(hook));
        self.keep_first_error(result);
        self
    }

    /// Exit hook used only when leaving for `to`.
    pub fn on_exit_to_kind<F>(mut self, state: S::Kind, to: S::Kind, hook: F) -> Self
    where
        F: FnMut(&mut C, &S, &S) + Send + 'static,
    {
        let result = self
            .table
            .hooks
            .exit
            .insert_peer_kind(state, to, Box::new(hook));
        self.keep_first_error(result);
        self
    }

    fn keep_first_error(&mut self, result: Result<(), BuildError>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    /// Finish the table.
    /// Returns the first conflicting registration, if any.
    pub fn build(self) -> Result<TransitionTable<S, E, C>, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.table),
        }
    }
}

impl<S: State, E: Event, C> Default for TableBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pending rule waiting for its shape.
///
/// `I` is the rule's input type: the event type for event rules, `()` for
/// polling rules. Every closure receives `(context, current state, input)`.
pub struct RuleBuilder<S: State, E: Event, C, I: Event> {
    builder: TableBuilder<S, E, C>,
    select: RuleSelector<S, E, C, I>,
    pattern: Pattern<S::Kind, I::Kind>,
}

impl<S: State, E: Event, C, I: Event> RuleBuilder<S, E, C, I> {
    /// Deterministic transition to `target`.
    pub fn goto(self, target: S) -> TableBuilder<S, E, C> {
        self.finish(Action::Goto {
            target,
            action: None,
        })
    }

    /// Deterministic transition to `target`, running `action` first.
    pub fn goto_with<F>(self, target: S, action: F) -> TableBuilder<S, E, C>
    where
        F: FnMut(&mut C, &S, &I) + Send + 'static,
    {
        self.finish(Action::Goto {
            target,
            action: Some(Box::new(action)),
        })
    }

    /// Branching transition; `branch` returns the next state.
    pub fn branch<F>(self, branch: F) -> TableBuilder<S, E, C>
    where
        F: FnMut(&mut C, &S, &I) -> S + Send + 'static,
    {
        self.finish(Action::Branch(Box::new(branch)))
    }

    /// Side effect only; the current state is kept.
    pub fn effect<F>(self, effect: F) -> TableBuilder<S, E, C>
    where
        F: FnMut(&mut C, &S, &I) + Send + 'static,
    {
        self.finish(Action::Effect(Box::new(effect)))
    }

    fn finish(self, action: Action<S, I, C>) -> TableBuilder<S, E, C> {
        let Self {
            mut builder,
            select,
            pattern,
        } = self;
        let result = select(&mut builder.table).insert(Rule::new(pattern, action));
        builder.keep_first_error(result);
        builder
    }
}
