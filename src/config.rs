//! Simulation configuration.
//!
//! Values come from `Default`, an optional JSON file, and then explicit
//! overrides (the CLI applies its flags through the `with_*` builders).
//! Missing JSON fields fall back to their defaults.
//!
//! ```json
//! {
//!   "process_count": 20,
//!   "time_quantum": 3,
//!   "seed": 42,
//!   "admission": "arrival-gated",
//!   "algorithms": ["fcfs", "round-robin"],
//!   "parallel": false,
//!   "generator": { "max_arrival": 20, "min_burst": 1, "max_burst": 10, "lowest_priority": 5 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::generator::GeneratorConfig;
use crate::scheduler::{Admission, AlgorithmKind};

/// Upper bound on generated process sets.
///
/// The preemptive schedulers step one tick at a time and rebuild the ready
/// set on every step, costing O(total burst × n). With the default
/// generator ranges this cap keeps a full run to a few hundred million
/// steps.
pub const MAX_PROCESS_COUNT: usize = 5_000;

/// Settings for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Round-robin quantum (ticks). Must be positive.
    pub time_quantum: i64,
    /// Generator seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Round-robin admission policy.
    pub admission: Admission,
    /// Algorithms to run; reported in canonical order.
    pub algorithms: Vec<AlgorithmKind>,
    /// Run algorithms on parallel threads.
    pub parallel: bool,
    /// Generated value ranges.
    pub generator: GeneratorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_count: 20,
            time_quantum: 3,
            seed: None,
            admission: Admission::default(),
            algorithms: AlgorithmKind::ALL.to_vec(),
            parallel: false,
            generator: GeneratorConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sets the number of generated processes.
    pub fn with_process_count(mut self, process_count: usize) -> Self {
        self.process_count = process_count;
        self
    }

    /// Sets the round-robin quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Fixes the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the round-robin admission policy.
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    /// Restricts the run to the given algorithms.
    pub fn with_algorithms(mut self, algorithms: Vec<AlgorithmKind>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the generator ranges.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Selected algorithms in canonical order, without duplicates.
    pub fn selected_algorithms(&self) -> Vec<AlgorithmKind> {
        let mut selected = self.algorithms.clone();
        selected.sort_unstable();
        selected.dedup();
        selected
    }

    /// Checks every value before any simulation starts.
    pub fn validate(&self) -> Result<()> {
        if self.time_quantum <= 0 {
            return Err(SimError::InvalidQuantum(self.time_quantum));
        }
        if self.process_count > MAX_PROCESS_COUNT {
            return Err(SimError::InvalidConfig(format!(
                "process_count {} exceeds the limit of {MAX_PROCESS_COUNT}",
                self.process_count
            )));
        }
        if self.algorithms.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one algorithm must be selected".into(),
            ));
        }
        self.generator.validate()
    }
}
