//! Counter State Machine
//!
//! Drives the counter machine through a full run, a reset, and a second
//! run with the fail flag set.
//!
//! Key concepts:
//! - Deterministic, branching and side-effect rules
//! - Enter/exit hooks journaling every real state change
//! - Reset through an any-state rule versus replacing the engine
//!
//! Run with: RUST_LOG=vfsm=debug cargo run --example counter

#[allow(dead_code)]
#[path = "../tests/common/counter.rs"]
mod counter;

use counter::{Command, Ctx, Journal, STEPS};
use tracing_subscriber::EnvFilter;
use vfsm::State;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Counter State Machine ===\n");

    let journal = Journal::default();
    let mut fsm = counter::engine(Ctx::with_journal(journal.clone()));

    fsm.process_event(Command::Process);
    for _ in 0..STEPS {
        fsm.poll();
        fsm.process_event(Command::Process);
    }
    tracing::info!(
        state = %fsm.visit(|state| state.name().to_string()),
        counter = fsm.context().counter,
        polls = fsm.context().polls,
        "first run finished"
    );

    fsm.process_event(Command::Reset);
    fsm.context_mut().fail = true;
    fsm.process_event(Command::Process);
    for _ in 0..STEPS {
        fsm.process_event(Command::Process);
    }
    tracing::info!(
        state = %fsm.visit(|state| state.name().to_string()),
        "second run finished"
    );

    println!("Path: {:?}\n", fsm.history().get_path());

    // Replacing the engine drops it without running its exit hook.
    fsm = counter::engine(Ctx::with_journal(journal.clone()));
    tracing::info!(state = ?fsm.kind(), "engine replaced");

    println!("Hook journal:");
    for entry in journal.lock().unwrap().iter() {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
}
