//! Top-level simulation configuration.

use crate::{GuardError, GuardResult, Tick, TickClock};

/// Run-wide configuration, typically built by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Seconds per tick.  A 30 Hz frame driver uses `1.0 / 30.0`.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate.  At 30 Hz, one minute is 1,800 ticks.
    pub total_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `TickClock` pre-configured for this run.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_duration_secs)
    }

    /// Reject configurations that would stall or misbehave at tick time.
    pub fn validate(&self) -> GuardResult<()> {
        if !(self.tick_duration_secs.is_finite() && self.tick_duration_secs > 0.0) {
            return Err(GuardError::Config(format!(
                "tick_duration_secs must be finite and positive, got {}",
                self.tick_duration_secs
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    /// 30 Hz, 10 simulated seconds, fixed seed.
    fn default() -> Self {
        Self {
            seed: 42,
            tick_duration_secs: 1.0 / 30.0,
            total_ticks: 300,
        }
    }
}
