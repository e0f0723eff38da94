//! Engine that resolves rules against the current state.

use crate::core::{Event, State, StateHistory, Trigger};
use crate::engine::config::{ConfigError, EngineConfig};
use crate::engine::outcome::Outcome;
use crate::table::rule::Fired;
use crate::table::{RuleSelector, TransitionTable};
use uuid::Uuid;

/// Finite state machine driven by a [`TransitionTable`].
///
/// The engine holds exactly one state value at all times. Every dispatch
/// resolves at most one rule; when that rule yields a state of a different
/// kind, the outgoing state's exit hook runs, then the incoming state's
/// enter hook, and only then is the new state committed.
///
/// Construction fires the initial state's enter hook (with the initial
/// state as its own peer) and never an exit hook.
///
/// # Reentrancy
///
/// Rules and hooks receive the context `C`, never the engine, so they
/// cannot dispatch into it. Follow-up dispatches are made by the caller
/// once the current call has returned.
///
/// # Replacing an engine
///
/// Assigning a fresh engine over an existing one (for example to reset its
/// context) drops the old engine without running the exit hook of the state
/// it held. Dispatching a reset-style event instead does run that exit hook.
/// Both paths are supported; pick the one whose hook behavior you want.
///
/// # Example
///
/// ```rust
/// use vfsm::engine::Engine;
/// use vfsm::table::TableBuilder;
/// use vfsm::{event_enum, state_enum};
///
/// state_enum! {
///     pub enum Phase {
///         Idle,
///         Run,
///     }
/// }
///
/// event_enum! {
///     pub enum Command {
///         Start,
///     }
/// }
///
/// let table = TableBuilder::<Phase, Command, Vec<&str>>::new()
///     .on(Phase::Idle, Command::Start)
///     .goto(Phase::Run)
///     .on_enter(Phase::Run, |log, _| log.push("enter run"))
///     .build()
///     .unwrap();
///
/// let mut engine = Engine::new(table, Vec::new(), Phase::Idle);
///
/// assert!(engine.process_event(Command::Start));
/// assert_eq!(engine.kind(), Phase::Run);
/// assert_eq!(engine.context(), &vec!["enter run"]);
/// assert!(!engine.process_event(Command::Start));
/// ```
pub struct Engine<S: State, E: Event, C> {
    id: Uuid,
    config: EngineConfig,
    table: TransitionTable<S, E, C>,
    context: C,
    state: S,
    history: StateHistory<S::Kind, E::Kind>,
}

impl<S: State, E: Event, C> Engine<S, E, C> {
    /// Create an engine with the default configuration.
    pub fn new(table: TransitionTable<S, E, C>, context: C, initial: S) -> Self {
        Self::with_config(table, context, initial, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    ///
    /// The configuration is taken as is; use
    /// [`try_with_config`](Self::try_with_config) to reject one that fails
    /// [`EngineConfig::validate`].
    pub fn with_config(
        mut table: TransitionTable<S, E, C>,
        mut context: C,
        initial: S,
        config: EngineConfig,
    ) -> Self {
        let id = Uuid::new_v4();
        let hook = table.hooks.enter.fire(&mut context, &initial, &initial);
        tracing::debug!(
            machine = %config.name,
            %id,
            state = initial.name(),
            hook = ?hook,
            "engine started"
        );
        Self {
            id,
            history: StateHistory::with_limit(config.history_limit),
            config,
            table,
            context,
            state: initial,
        }
    }

    /// Create an engine after validating `config`.
    ///
    /// No hook runs when the configuration is rejected.
    pub fn try_with_config(
        table: TransitionTable<S, E, C>,
        context: C,
        initial: S,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(table, context, initial, config))
    }

    /// Evaluate the polling rule for the current state.
    ///
    /// Returns `false` when no polling rule matches; the state is untouched.
    pub fn poll(&mut self) -> bool {
        self.dispatch_poll().is_handled()
    }

    /// Dispatch `event` against the current state.
    ///
    /// Returns `false` when no rule matches; the state is untouched.
    pub fn process_event(&mut self, event: E) -> bool {
        self.dispatch_event(event).is_handled()
    }

    /// Like [`poll`](Self::poll), reporting what happened.
    pub fn dispatch_poll(&mut self) -> Outcome<S::Kind> {
        self.dispatch(TransitionTable::poll_rules, &(), Trigger::Poll)
    }

    /// Like [`process_event`](Self::process_event), reporting what happened.
    pub fn dispatch_event(&mut self, event: E) -> Outcome<S::Kind> {
        let trigger = Trigger::Event(event.kind());
        self.dispatch(TransitionTable::event_rules, &event, trigger)
    }

    fn dispatch<I: Event>(
        &mut self,
        select: RuleSelector<S, E, C, I>,
        input: &I,
        trigger: Trigger<E::Kind>,
    ) -> Outcome<S::Kind> {
        let Some(rule) = select(&mut self.table).resolve(self.state.kind(), input.kind()) else {
            tracing::trace!(
                machine = %self.config.name,
                id = %self.id,
                state = self.state.name(),
                ?trigger,
                "no matching rule"
            );
            return Outcome::Unhandled;
        };

        let pattern = rule.pattern;
        match rule.fire(&mut self.context, &self.state, input) {
            Fired::Effect => {
                tracing::trace!(
                    machine = %self.config.name,
                    id = %self.id,
                    state = self.state.name(),
                    ?trigger,
                    ?pattern,
                    "side effect rule ran"
                );
                Outcome::Handled
            }
            Fired::Next(next) => self.commit(next, trigger),
        }
    }

    fn commit(&mut self, next: S, trigger: Trigger<E::Kind>) -> Outcome<S::Kind> {
        let from = self.state.kind();
        let to = next.kind();
        if from == to {
            tracing::trace!(
                machine = %self.config.name,
                id = %self.id,
                state = next.name(),
                ?trigger,
                "stayed"
            );
            self.state = next;
            return Outcome::Stayed { state: to };
        }

        let hooks = &mut self.table.hooks;
        let exit = hooks.exit.fire(&mut self.context, &self.state, &next);
        let enter = hooks.enter.fire(&mut self.context, &next, &self.state);
        tracing::debug!(
            machine = %self.config.name,
            id = %self.id,
            from = self.state.name(),
            to = next.name(),
            ?trigger,
            exit_hook = ?exit,
            enter_hook = ?enter,
            "state changed"
        );

        self.history.record(from, to, trigger);
        self.state = next;
        Outcome::Transitioned { from, to }
    }

    /// Inspect the current state.
    pub fn visit<R>(&self, visitor: impl FnOnce(&S) -> R) -> R {
        visitor(&self.state)
    }

    /// Inspect the current state with exclusive access.
    ///
    /// The visitor may edit the state's payload. It works on a copy that is
    /// committed only once the visitor returns with the kind unchanged, so
    /// a panicking visitor leaves the engine as it was.
    ///
    /// # Panics
    ///
    /// Panics if the visitor replaces the state with one of another kind;
    /// kind changes go through dispatch so that hooks run.
    pub fn visit_mut<R>(&mut self, visitor: impl FnOnce(&mut S) -> R) -> R {
        let mut scratch = self.state.clone();
        let result = visitor(&mut scratch);
        assert_eq!(
            self.state.kind(),
            scratch.kind(),
            "visit_mut changed the state kind; use dispatch to change state"
        );
        self.state = scratch;
        result
    }

    /// Kind of the current state.
    pub fn kind(&self) -> S::Kind {
        self.state.kind()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the context, e.g. to seed flags between dispatches.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn table(&self) -> &TransitionTable<S, E, C> {
        &self.table
    }

    /// Real state changes made so far (bounded by the configured limit).
    pub fn history(&self) -> &StateHistory<S::Kind, E::Kind> {
        &self.history
    }

    /// Identifier of this engine instance, attached to its log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Take the engine apart without running any hook.
    ///
    /// The table can be handed to a new engine to restart the machine.
    pub fn into_parts(self) -> (TransitionTable<S, E, C>, C, S) {
        (self.table, self.context, self.state)
    }
}
