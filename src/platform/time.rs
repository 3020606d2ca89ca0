//! Fixed-step frame driver
//!
//! Accumulates variable wall-clock frame time and hands out whole ticks.
//! The simulation never sees `dt`; it only sees how many ticks to run.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState, TickInput, advance};

/// Longest frame we try to catch up on (seconds)
const MAX_FRAME_TIME: f64 = 0.1;

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f64,
    step: f64,
    max_substeps: u32,
    /// Launch/restart presses waiting for a tick to consume them
    pending: TickInput,
    /// Events from every tick of the last frame, in order
    events: Vec<GameEvent>,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
            pending: TickInput::default(),
            events: Vec::new(),
        }
    }

    /// Add a frame's elapsed time and return how many ticks to run now
    pub fn accumulate(&mut self, frame_time: f64) -> u32 {
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Run however many ticks this frame owes.
    ///
    /// One-shot inputs (launch, restart) are held until a tick runs, so a press
    /// on a frame that owes no tick is delivered on the next one that does.
    /// They are consumed by the first tick only.
    pub fn run_frame(&mut self, state: &mut GameState, input: TickInput, frame_time: f64) -> u32 {
        self.pending.launch |= input.launch;
        self.pending.restart |= input.restart;
        self.events.clear();

        let ticks = self.accumulate(frame_time);
        for _ in 0..ticks {
            let tick_input = TickInput {
                launch: self.pending.launch,
                restart: self.pending.restart,
                ..input
            };
            advance(state, &tick_input);
            self.events.extend_from_slice(&state.events);
            self.pending = TickInput::default();
        }
        ticks
    }

    /// Events produced by all ticks of the last `run_frame`
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
