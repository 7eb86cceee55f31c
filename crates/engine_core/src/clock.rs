//! Fixed-tick animation clock driving the ambient motion.

/// Peak displacement of the tourist bob, in world units.
pub const BOUNCE_AMPLITUDE: f32 = 0.1;
/// Angular frequency of the bob, in radians per second.
pub const BOUNCE_FREQUENCY: f32 = 2.0;
/// Cloud drift speed in world units per second (0.05 per 16 ms tick).
pub const DRIFT_RATE: f32 = 3.125;
/// The drift accumulator resets to zero once it exceeds this.
pub const DRIFT_BOUND: f32 = 100.0;

/// Monotonic time plus the oscillators derived from it.
///
/// The clock is a pure function of the sequence of deltas fed to
/// [`AnimationClock::tick`]; replaying the same deltas reproduces the same state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    time: f32,
    drift: f32,
    ticks: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one fixed tick. Negative or non-finite deltas are ignored so
    /// time never runs backwards.
    pub fn tick(&mut self, delta_seconds: f32) {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            log::trace!("Ignoring clock delta {}", delta_seconds);
            return;
        }
        self.time += delta_seconds;
        self.ticks += 1;
        self.drift += DRIFT_RATE * delta_seconds;
        if self.drift > DRIFT_BOUND {
            self.drift = 0.0;
        }
    }

    /// Accumulated seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of ticks applied.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Bounded oscillator in `[-BOUNCE_AMPLITUDE, BOUNCE_AMPLITUDE]`.
    pub fn bounce(&self) -> f32 {
        BOUNCE_AMPLITUDE * (self.time * BOUNCE_FREQUENCY).sin()
    }

    /// Wrapping accumulator in `[0, DRIFT_BOUND]`.
    pub fn drift(&self) -> f32 {
        self.drift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FIXED_TICK_SECONDS;

    #[test]
    fn clock_replay_is_deterministic() {
        let deltas = [0.016, 0.016, 0.033, 0.008, 0.016, 0.1];
        let mut a = AnimationClock::new();
        let mut b = AnimationClock::new();
        for _ in 0..500 {
            for d in deltas {
                a.tick(d);
                b.tick(d);
            }
        }
        assert_eq!(a, b);
        assert_eq!(a.bounce().to_bits(), b.bounce().to_bits());
    }

    #[test]
    fn clock_time_is_monotonic() {
        let mut clock = AnimationClock::new();
        clock.tick(0.5);
        clock.tick(-1.0);
        clock.tick(f32::NAN);
        assert_eq!(clock.time(), 0.5);
        assert_eq!(clock.ticks(), 1);
    }

    #[test]
    fn bounce_stays_bounded() {
        let mut clock = AnimationClock::new();
        for _ in 0..10_000 {
            clock.tick(FIXED_TICK_SECONDS);
            assert!(clock.bounce().abs() <= BOUNCE_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn drift_resets_after_bound() {
        let mut clock = AnimationClock::new();
        let mut max_seen = 0.0f32;
        let mut wrapped = false;
        for _ in 0..3000 {
            let before = clock.drift();
            clock.tick(FIXED_TICK_SECONDS);
            if clock.drift() < before {
                wrapped = true;
                assert_eq!(clock.drift(), 0.0);
            }
            max_seen = max_seen.max(clock.drift());
        }
        assert!(wrapped, "2000+ ticks at 0.05 per tick must pass the bound");
        assert!(max_seen <= DRIFT_BOUND);
    }

    #[test]
    fn drift_matches_per_tick_step() {
        let mut clock = AnimationClock::new();
        clock.tick(FIXED_TICK_SECONDS);
        assert!((clock.drift() - 0.05).abs() < 1e-6);
    }
}
