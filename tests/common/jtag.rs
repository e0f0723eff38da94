//! IEEE 1149.1 TAP controller clocked by TMS.

use vfsm::{state_enum, Engine, EngineConfig, Event, TableBuilder, TransitionTable};

state_enum! {
    pub enum Tap {
        Reset,
        Idle,
        SelectDrScan,
        CaptureDr,
        ShiftDr,
        Exit1Dr,
        PauseDr,
        Exit2Dr,
        UpdateDr,
        SelectIrScan,
        CaptureIr,
        ShiftIr,
        Exit1Ir,
        PauseIr,
        Exit2Ir,
        UpdateIr,
    }
}

pub const ALL: [Tap; 16] = [
    Tap::Reset,
    Tap::Idle,
    Tap::SelectDrScan,
    Tap::CaptureDr,
    Tap::ShiftDr,
    Tap::Exit1Dr,
    Tap::PauseDr,
    Tap::Exit2Dr,
    Tap::UpdateDr,
    Tap::SelectIrScan,
    Tap::CaptureIr,
    Tap::ShiftIr,
    Tap::Exit1Ir,
    Tap::PauseIr,
    Tap::Exit2Ir,
    Tap::UpdateIr,
];

/// One TCK edge with the sampled TMS level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    Tms(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockKind {
    Tms,
}

impl Event for Clock {
    type Kind = ClockKind;

    fn kind(&self) -> ClockKind {
        match self {
            Self::Tms(_) => ClockKind::Tms,
        }
    }
}

impl Clock {
    pub fn tms(&self) -> bool {
        match *self {
            Self::Tms(level) => level,
        }
    }
}

#[derive(Debug, Default)]
pub struct Shifter {
    pub dr_bits: u32,
    pub ir_bits: u32,
    pub dr_updates: u32,
    pub ir_updates: u32,
}

/// `(state, next on TMS high, next on TMS low)` for every state that does
/// not shift data.
const EDGES: [(Tap, Tap, Tap); 14] = [
    (Tap::Reset, Tap::Reset, Tap::Idle),
    (Tap::Idle, Tap::SelectDrScan, Tap::Idle),
    (Tap::SelectDrScan, Tap::SelectIrScan, Tap::CaptureDr),
    (Tap::CaptureDr, Tap::Exit1Dr, Tap::ShiftDr),
    (Tap::Exit1Dr, Tap::UpdateDr, Tap::PauseDr),
    (Tap::PauseDr, Tap::Exit2Dr, Tap::PauseDr),
    (Tap::Exit2Dr, Tap::UpdateDr, Tap::ShiftDr),
    (Tap::UpdateDr, Tap::SelectDrScan, Tap::Idle),
    (Tap::SelectIrScan, Tap::Reset, Tap::CaptureIr),
    (Tap::CaptureIr, Tap::Exit1Ir, Tap::ShiftIr),
    (Tap::Exit1Ir, Tap::UpdateIr, Tap::PauseIr),
    (Tap::PauseIr, Tap::Exit2Ir, Tap::PauseIr),
    (Tap::Exit2Ir, Tap::UpdateIr, Tap::ShiftIr),
    (Tap::UpdateIr, Tap::SelectDrScan, Tap::Idle),
];

pub fn table() -> TransitionTable<Tap, Clock, Shifter> {
    let mut builder = TableBuilder::<Tap, Clock, Shifter>::new();
    for (from, high, low) in EDGES {
        builder = builder
            .on(from, ClockKind::Tms)
            .branch(move |_, _, clock: &Clock| if clock.tms() { high } else { low });
    }

    builder
        .on(Tap::ShiftDr, ClockKind::Tms)
        .branch(|shifter, _, clock| {
            if clock.tms() {
                return Tap::Exit1Dr;
            }
            shifter.dr_bits += 1;
            Tap::ShiftDr
        })
        .on(Tap::ShiftIr, ClockKind::Tms)
        .branch(|shifter, _, clock| {
            if clock.tms() {
                return Tap::Exit1Ir;
            }
            shifter.ir_bits += 1;
            Tap::ShiftIr
        })
        .on_enter(Tap::UpdateDr, |shifter, _| shifter.dr_updates += 1)
        .on_enter(Tap::UpdateIr, |shifter, _| shifter.ir_updates += 1)
        .build()
        .expect("TAP table has no conflicting rules")
}

pub fn engine_in(initial: Tap) -> Engine<Tap, Clock, Shifter> {
    Engine::with_config(
        table(),
        Shifter::default(),
        initial,
        EngineConfig::named("jtag"),
    )
}

/// Clock the TAP once per level in `levels`.
pub fn clock(engine: &mut Engine<Tap, Clock, Shifter>, levels: &[u8]) {
    for &level in levels {
        engine.process_event(Clock::Tms(level != 0));
    }
}
