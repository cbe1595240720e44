//! Random process-set generation.
//!
//! The random source is always passed in, so a seed reproduces the same
//! process set on every run.
//!
//! # Example
//!
//! ```
//! use u_procsim::generator::{generate_processes, seeded_rng, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let a = generate_processes(5, &config, &mut seeded_rng(7));
//! let b = generate_processes(5, &config, &mut seeded_rng(7));
//! assert_eq!(a, b);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::{Pid, Process, Tick, HIGHEST_PRIORITY};

/// Value ranges for generated processes (all bounds inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Latest arrival tick.
    pub max_arrival: Tick,
    /// Shortest burst.
    pub min_burst: Tick,
    /// Longest burst.
    pub max_burst: Tick,
    /// Numerically largest (least important) priority.
    pub lowest_priority: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            lowest_priority: 5,
        }
    }
}

impl GeneratorConfig {
    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: Tick, max_burst: Tick) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the least important priority level.
    pub fn with_lowest_priority(mut self, lowest_priority: u32) -> Self {
        self.lowest_priority = lowest_priority;
        self
    }

    /// Checks that every range is non-empty and bursts are positive.
    pub fn validate(&self) -> Result<()> {
        if self.min_burst == 0 {
            return Err(SimError::InvalidConfig(
                "min_burst must be at least 1".into(),
            ));
        }
        if self.min_burst > self.max_burst {
            return Err(SimError::InvalidConfig(format!(
                "min_burst {} exceeds max_burst {}",
                self.min_burst, self.max_burst
            )));
        }
        if self.lowest_priority < HIGHEST_PRIORITY {
            return Err(SimError::InvalidConfig(format!(
                "lowest_priority must be at least {HIGHEST_PRIORITY}"
            )));
        }
        Ok(())
    }
}

/// Builds a reproducible random source.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates `count` fresh processes with IDs `0..count`.
///
/// Assumes `config` has been validated.
pub fn generate_processes<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Process> {
    (0..count)
        .map(|i| {
            let arrival = rng.random_range(0..=config.max_arrival);
            let burst = rng.random_range(config.min_burst..=config.max_burst);
            let priority = rng.random_range(HIGHEST_PRIORITY..=config.lowest_priority);
            Process::new(i as Pid, arrival, burst).with_priority(priority)
        })
        .collect()
}
