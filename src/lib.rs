//! vfsm: a declarative finite state machine engine
//!
//! The caller supplies a closed set of states, a table of transition rules
//! and lifecycle hooks, and a context object the rules may read and write.
//! The engine holds the single current state and drives it with polling
//! ticks (`poll`) or discrete events (`process_event`).
//!
//! # Core Concepts
//!
//! - **State / Event**: types identified by their *kind*; values of the same
//!   kind are interchangeable for dispatch
//! - **Rule table**: rules keyed by `(state, event)` patterns, resolved
//!   exact → any-state → any-event → catch-all; each rule is deterministic,
//!   branching, or side-effect only
//! - **Hooks**: optional enter/exit callbacks that run exactly once per real
//!   change of state kind, exit before enter, both before the commit
//! - **History**: bounded record of real state changes
//!
//! Unmatched combinations are a defined no-op: `poll` and `process_event`
//! return `false` and nothing runs.
//!
//! # Example
//!
//! ```rust
//! use vfsm::{event_enum, state_enum, Engine, TableBuilder};
//!
//! state_enum! {
//!     pub enum Phase {
//!         Idle,
//!         Run,
//!         Finish,
//!     }
//! }
//!
//! event_enum! {
//!     pub enum Command {
//!         Start,
//!         Stop,
//!         Reset,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Ctx {
//!     ticks: u32,
//! }
//!
//! let table = TableBuilder::<Phase, Command, Ctx>::new()
//!     .on(Phase::Idle, Command::Start)
//!     .goto(Phase::Run)
//!     .on(Phase::Run, Command::Stop)
//!     .goto(Phase::Finish)
//!     .on_any_state(Command::Reset)
//!     .goto(Phase::Idle)
//!     .poll(Phase::Run)
//!     .effect(|ctx, _, _| ctx.ticks += 1)
//!     .build()
//!     .unwrap();
//!
//! let mut fsm = Engine::new(table, Ctx::default(), Phase::Idle);
//!
//! fsm.process_event(Command::Start);
//! fsm.visit(|state| {
//!     assert_eq!(*state, Phase::Run);
//! });
//! fsm.poll();
//! fsm.process_event(Command::Stop);
//! fsm.process_event(Command::Reset);
//!
//! assert_eq!(fsm.kind(), Phase::Idle);
//! assert_eq!(fsm.context().ticks, 1);
//! ```

pub mod core;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Event, State, StateHistory, StateTransition, Trigger};
pub use engine::{Engine, EngineConfig, Outcome};
pub use table::{BuildError, Lifecycle, Shape, TableBuilder, TransitionTable};
