//! Counter machine: runs a fixed number of steps, then finishes or fails.

use std::sync::{Arc, Mutex};
use vfsm::{event_enum, state_enum, Engine, EngineConfig, State, TableBuilder, TransitionTable};

/// Steps taken in `Run` before the machine leaves it.
pub const STEPS: u32 = 5;

state_enum! {
    pub enum Counter {
        Init,
        Run,
        Done,
        Fail,
        Wait,
    }
}

event_enum! {
    pub enum Command {
        Process,
        Reset,
    }
}

pub const ALL: [Counter; 5] = [
    Counter::Init,
    Counter::Run,
    Counter::Done,
    Counter::Fail,
    Counter::Wait,
];

/// Hook journal shared with the caller so it outlives the engine.
pub type Journal = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Default)]
pub struct Ctx {
    pub counter: u32,
    pub fail: bool,
    pub polls: u32,
    pub journal: Journal,
}

impl Ctx {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    fn note(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

pub fn table() -> TransitionTable<Counter, Command, Ctx> {
    let mut builder = TableBuilder::<Counter, Command, Ctx>::new()
        .on(Counter::Init, Command::Process)
        .goto_with(Counter::Run, |ctx, _, _| ctx.counter = 0)
        .on(Counter::Run, Command::Process)
        .branch(|ctx, _, _| {
            ctx.counter += 1;
            if ctx.counter != STEPS {
                Counter::Run
            } else if ctx.fail {
                Counter::Fail
            } else {
                Counter::Done
            }
        })
        .on(Counter::Done, Command::Process)
        .goto(Counter::Done)
        .on(Counter::Fail, Command::Process)
        .goto(Counter::Fail)
        .on_any_state(Command::Reset)
        .goto(Counter::Init)
        .poll(Counter::Run)
        .effect(|ctx, _, _| ctx.polls += 1);

    for state in ALL {
        builder = builder
            .on_enter(state, |ctx, s| ctx.note(format!("enter {}", s.name())))
            .on_exit(state, |ctx, s| ctx.note(format!("exit {}", s.name())));
    }

    builder.build().expect("counter table has no conflicting rules")
}

pub fn engine(ctx: Ctx) -> Engine<Counter, Command, Ctx> {
    engine_in(Counter::Init, ctx)
}

pub fn engine_in(initial: Counter, ctx: Ctx) -> Engine<Counter, Command, Ctx> {
    Engine::with_config(table(), ctx, initial, EngineConfig::named("counter"))
}
