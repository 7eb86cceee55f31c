//! Frame timing for the host loop.

use std::time::{Duration, Instant};

/// Length of one animation tick in seconds (the host's 16 ms timer).
pub const FIXED_TICK_SECONDS: f32 = 0.016;

/// Longest backlog the accumulator keeps after a stall (e.g. window drag).
const MAX_ACCUMULATED: Duration = Duration::from_millis(250);

/// Drains fixed ticks from real elapsed frame time.
#[derive(Debug)]
pub struct Time {
    /// Time of the last frame.
    last_frame: Instant,
    /// Fixed timestep for animation ticks.
    fixed_timestep: Duration,
    /// Accumulated time for fixed updates.
    accumulator: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager ticking at [`FIXED_TICK_SECONDS`].
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            fixed_timestep: Duration::from_secs_f32(FIXED_TICK_SECONDS),
            accumulator: Duration::ZERO,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.advance(now - self.last_frame);
        self.last_frame = now;
    }

    /// Feed a frame duration into the accumulator.
    fn advance(&mut self, delta: Duration) {
        self.accumulator = (self.accumulator + delta).min(MAX_ACCUMULATED);
    }

    /// Check if a fixed update should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }
}
