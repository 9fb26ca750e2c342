//! Round/timer state machine and the driver that executes its effects.
//!
//! [`Session`] is the pure part: `apply(event)` updates state and returns the
//! side effects to perform. [`GameApp`] owns the collaborators (input,
//! presenter, cue player) and the tick schedule, and turns effects into calls.

use alloc::vec::Vec;
use core::{mem, ops::Deref};

use heapless::Vec as HeaplessVec;
use log::{debug, info, warn};
use rand::Rng;

use crate::{
    audio::CuePlayer,
    content::Record,
    input::{InputEvent, InputProvider, InvalidInput, parse_duration},
    pool::{Batch, MAX_BATCH_SIZE, PoolError, RoundPool},
    render::{Controls, Presenter, RevealItem, RoundCard},
    settings::GameConfig,
    timer::{ClockText, TickSchedule, TimerState, format_clock},
};

const MAX_EFFECTS: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Observable controller state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Setup,
    Running { paused: bool },
    Expired,
    Revealed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Stage {
    Setup,
    Running,
    Expired,
    Revealed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Input(InputEvent),
    Tick,
}

impl Event {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Input(input) => input.name(),
            Self::Tick => "tick",
        }
    }
}

impl From<InputEvent> for Event {
    fn from(input: InputEvent) -> Self {
        Self::Input(input)
    }
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    ShowSetup,
    RejectDuration(InvalidInput),
    RenderRound { round: u32, batch: Batch },
    RenderTimer(ClockText),
    RenderReveal(Batch),
    SetControls(Controls),
    PlayCue,
    StopCue,
    ArmTick,
    DisarmTick,
}

/// Ordered effects of one transition.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Effects(HeaplessVec<Effect, MAX_EFFECTS>);

impl Effects {
    pub const fn new() -> Self {
        Self(HeaplessVec::new())
    }

    fn emit(&mut self, effect: Effect) {
        if let Err(dropped) = self.0.push(effect) {
            warn!("session: effect list full, dropping {:?}", dropped);
        }
    }
}

impl Deref for Effects {
    type Target = [Effect];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Effects {
    type Item = Effect;
    type IntoIter = <HeaplessVec<Effect, MAX_EFFECTS> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// All mutable game state for one loaded word list.
pub struct Session<R: Rng> {
    records: Vec<Record>,
    pool: RoundPool,
    rng: R,
    config: GameConfig,
    stage: Stage,
    timer: TimerState,
    round: Batch,
    previous_round: Option<Batch>,
    round_number: u32,
}

/// Session plus the collaborators that make its effects visible.
pub struct GameApp<R, IN, P, C>
where
    R: Rng,
    IN: InputProvider,
    P: Presenter,
    C: CuePlayer,
{
    session: Session<R>,
    input: IN,
    presenter: P,
    cue: C,
    schedule: TickSchedule,
    pending_setup: bool,
}

include!("session.rs");
include!("view.rs");
include!("input.rs");
include!("runtime.rs");
