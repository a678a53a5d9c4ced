//! Settling animation: a bounded, decelerating sequence of draws.

use std::time::Duration;

use crate::engine::dice::DieKind;
use crate::engine::rng;

/// Draws per session; the 25th write is the die's final result.
pub const MAX_STEPS: u32 = 25;
/// Wait after the first step, in milliseconds.
pub const BASE_DELAY_MS: f64 = 30.0;
/// Each successive wait is 10% longer than the previous one.
pub const DECAY_FACTOR: f64 = 1.1;

/// One in-progress animated roll of a single die.
///
/// An explicit `(step, delay)` state machine: each [`RollSession::advance`]
/// draws the next intermediate value and reports how long to wait before
/// advancing again. The caller owns the scheduling; the session itself never
/// sleeps.
#[derive(Debug)]
pub struct RollSession {
    die: DieKind,
    step: u32,
    delay_ms: f64,
}

/// Outcome of a single animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollStep {
    /// Value to display for this step.
    pub value: u16,
    /// Wait before the next advance, or `None` once the session has settled.
    pub wait: Option<Duration>,
}

impl RollSession {
    pub fn new(die: DieKind) -> Self {
        Self {
            die,
            step: 0,
            delay_ms: BASE_DELAY_MS,
        }
    }

    pub fn die(&self) -> DieKind {
        self.die
    }

    /// Steps executed so far.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Whether the step budget is exhausted.
    pub fn settled(&self) -> bool {
        self.step >= MAX_STEPS
    }

    /// Execute one step: draw a value, then compute the wait before the next.
    pub fn advance(&mut self) -> RollStep {
        // Supported die kinds always have a positive face count; a failed
        // draw is a programming error and must surface, not be swallowed.
        let value = rng::draw(self.die.faces()).expect("die kind has a positive face count");
        self.step += 1;
        let wait = if self.step < MAX_STEPS {
            let wait = Duration::from_secs_f64(self.delay_ms / 1000.0);
            self.delay_ms *= DECAY_FACTOR;
            Some(wait)
        } else {
            None
        };
        RollStep { value, wait }
    }
}
