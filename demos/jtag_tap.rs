//! JTAG TAP Controller
//!
//! Models the IEEE 1149.1 test access port as a sixteen-state machine
//! clocked by TMS, then walks it through an IR scan and a DR scan.
//!
//! Key concepts:
//! - Events carrying a payload (the sampled TMS level)
//! - Branching rules choosing the next state from that payload
//! - Enter hooks counting register updates
//!
//! Run with: RUST_LOG=vfsm=debug cargo run --example jtag_tap

#[allow(dead_code)]
#[path = "../tests/common/jtag.rs"]
mod jtag;

use jtag::Tap;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== JTAG TAP Controller ===\n");

    let mut tap = jtag::engine_in(Tap::Idle);

    // Five high clocks reach Test-Logic-Reset from anywhere.
    jtag::clock(&mut tap, &[1, 1, 1, 1, 1]);
    tracing::info!(state = ?tap.kind(), "controller reset");

    // Load a 4-bit instruction.
    jtag::clock(&mut tap, &[0, 1, 1, 0, 0]);
    jtag::clock(&mut tap, &[0, 0, 0, 0, 1, 1, 0]);
    tracing::info!(
        state = ?tap.kind(),
        ir_bits = tap.context().ir_bits,
        "instruction loaded"
    );

    // Shift 8 data bits through a pause.
    jtag::clock(&mut tap, &[1, 0, 0]);
    jtag::clock(&mut tap, &[0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 0]);
    tracing::info!(
        state = ?tap.kind(),
        dr_bits = tap.context().dr_bits,
        dr_updates = tap.context().dr_updates,
        "data register updated"
    );

    println!("Visited states:");
    for transition in tap.history().transitions() {
        println!("  {:?} -> {:?}", transition.from, transition.to);
    }

    println!("\n=== Example Complete ===");
}
