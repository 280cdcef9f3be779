//! Simulation clock
//!
//! Accumulates wall-clock time from the front-end and runs the ticks that
//! have come due at the current score-dependent interval. Stops for good
//! once the session is over.

use super::input::InputArbiter;
use super::state::GameState;
use super::tick::tick;
use crate::consts::{MAX_CATCHUP_TICKS, MAX_FRAME_MS};

#[derive(Debug, Clone, Default)]
pub struct Clock {
    accumulator_ms: f64,
    halted: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Time banked toward the next tick
    pub fn pending_ms(&self) -> f64 {
        self.accumulator_ms
    }

    /// Feed `elapsed_ms` of real time; returns the number of ticks run
    ///
    /// The pending command is latched once per tick, so a command only ever
    /// affects the first tick that runs after it was submitted.
    pub fn update(&mut self, state: &mut GameState, input: &mut InputArbiter, elapsed_ms: f64) -> u32 {
        if self.halted || state.is_over() {
            self.halt();
            return 0;
        }

        // Long stalls (hidden tab, debugger) must not replay as a burst
        self.accumulator_ms += elapsed_ms.clamp(0.0, MAX_FRAME_MS);

        let mut ticks = 0;
        while ticks < MAX_CATCHUP_TICKS {
            let interval = state.tick_interval_ms();
            if self.accumulator_ms < interval {
                break;
            }
            self.accumulator_ms -= interval;

            let latched = input.latch();
            tick(state, &latched);
            ticks += 1;

            if state.is_over() {
                self.halt();
                break;
            }
        }
        ticks
    }

    fn halt(&mut self) {
        if !self.halted {
            log::debug!("Clock halted");
        }
        self.halted = true;
        self.accumulator_ms = 0.0;
    }
}
