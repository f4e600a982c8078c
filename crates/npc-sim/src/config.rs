//! Run-level simulation parameters.

use crate::{SimError, SimResult};

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of ticks to run.
    pub total_ticks: u64,

    /// Global seed; each agent's RNG stream is derived from this and its ID.
    pub seed: u64,

    /// Simulated seconds per tick, handed to every motor advance.
    pub step_secs: f32,

    /// Emit an agent-state snapshot to observers every this many ticks.
    /// `0` disables snapshots entirely.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             1_000,
            seed:                    0,
            step_secs:               0.1,
            snapshot_interval_ticks: 10,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be at least 1".into()));
        }
        if !(self.step_secs > 0.0) {
            return Err(SimError::Config(format!(
                "step_secs must be positive, got {}",
                self.step_secs
            )));
        }
        Ok(())
    }
}
