use std::time::Duration;

use crate::config::{BASE_SPEED, MAX_SPEED, POINTS_PER_SPEED_STEP, SPEED_GROWTH_FACTOR};

/// Longest stretch of wall-clock time a single frame may feed the timer.
/// Keeps a suspended or stalled process from replaying as a burst of moves.
const MAX_ADVANCE_SECONDS: f32 = 0.25;

/// Current movement rate in moves per second for `score`.
///
/// The rate steps up 10% for every five points and saturates at
/// `MAX_SPEED`, so late-game play stays humanly possible.
#[must_use]
pub fn moves_per_second(score: u32) -> f32 {
    let steps = score / POINTS_PER_SPEED_STEP;
    let raw = BASE_SPEED * SPEED_GROWTH_FACTOR.powi(steps as i32);
    raw.min(MAX_SPEED)
}

/// Wall-clock accumulator that converts frame time into simulation ticks.
///
/// Frames deposit elapsed time with [`advance`](Self::advance); the game
/// loop then drains whole move intervals with [`try_tick`](Self::try_tick),
/// one at a time so the interval can be re-derived from the live score
/// between ticks. Fractional remainders carry over, so a speed change
/// stretches or compresses only the next interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickTimer {
    accumulator: f32,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposits elapsed frame time, clamped to `MAX_ADVANCE_SECONDS`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.accumulator += elapsed.as_secs_f32().min(MAX_ADVANCE_SECONDS);
    }

    /// Consumes one move interval at the given rate if enough time has
    /// accumulated. Returns true when a simulation tick is due.
    pub fn try_tick(&mut self, moves_per_second: f32) -> bool {
        debug_assert!(moves_per_second > 0.0);

        let interval = 1.0 / moves_per_second;
        if self.accumulator >= interval {
            self.accumulator -= interval;
            true
        } else {
            false
        }
    }

    /// Drops any banked time, e.g. when a new round starts.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
