//! Simulation driver.
//!
//! Runs every selected algorithm over one process set and collects the
//! schedules and metrics into a [`SimulationReport`].
//!
//! # Isolation
//!
//! Schedulers receive the input by shared reference and simulate private
//! copies, so every run starts from identical conditions. In parallel mode
//! each algorithm runs on its own scoped thread; there is no shared mutable
//! state and no locking. Runs are always reported in canonical order.
//!
//! # Example
//!
//! ```
//! use u_procsim::config::SimulationConfig;
//! use u_procsim::simulation::Simulation;
//!
//! let sim = Simulation::new(SimulationConfig::default().with_seed(42)).unwrap();
//! let report = sim.run_generated().unwrap();
//! assert_eq!(report.runs.len(), 6);
//! assert!(report.get("Round Robin").is_some());
//! ```

use std::fs;
use std::path::Path;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::generator::{generate_processes, seeded_rng};
use crate::models::{Process, ProcessSpec, Schedule};
use crate::scheduler::{AlgorithmKind, ScheduleMetrics, Scheduler};
use crate::validation::validate_processes;

/// Outcome of one algorithm over the shared input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    /// Which algorithm ran.
    pub algorithm: AlgorithmKind,
    /// Display name (e.g., "SJF Preemptive").
    pub name: String,
    /// Completed processes and timeline.
    pub schedule: Schedule,
    /// Aggregated metrics.
    pub metrics: ScheduleMetrics,
}

/// Results of all algorithms over one process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Generator seed, when the input was generated.
    pub seed: Option<u64>,
    /// Round-robin quantum used.
    pub time_quantum: i64,
    /// The input process set.
    pub input: Vec<Process>,
    /// One entry per algorithm, in canonical order.
    pub runs: Vec<AlgorithmRun>,
}

impl SimulationReport {
    /// Looks up a run by display name.
    pub fn get(&self, name: &str) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.name == name)
    }

    /// Looks up a run by algorithm.
    pub fn run_for(&self, algorithm: AlgorithmKind) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// Run with the lowest average waiting time (first wins on ties).
    pub fn best_by_waiting(&self) -> Option<&AlgorithmRun> {
        self.runs.iter().min_by(|a, b| {
            a.metrics
                .avg_waiting
                .partial_cmp(&b.metrics.avg_waiting)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// A configured set of schedulers.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    schedulers: Vec<(AlgorithmKind, Box<dyn Scheduler>)>,
}

impl Simulation {
    /// Validates the configuration and builds the schedulers.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] or [`SimError::InvalidConfig`].
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let schedulers = config
            .selected_algorithms()
            .into_iter()
            .map(|kind| Ok((kind, kind.build(config.time_quantum, config.admission)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, schedulers })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generates a process set, returning the seed that produced it.
    pub fn generate(&self) -> (u64, Vec<Process>) {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let processes = generate_processes(
            self.config.process_count,
            &self.config.generator,
            &mut seeded_rng(seed),
        );
        info!(seed, count = processes.len(), "generated process set");
        (seed, processes)
    }

    /// Generates a process set and runs every algorithm over it.
    pub fn run_generated(&self) -> Result<SimulationReport> {
        let (seed, processes) = self.generate();
        let mut report = self.run(&processes)?;
        report.seed = Some(seed);
        Ok(report)
    }

    /// Runs every algorithm over `processes`.
    ///
    /// # Errors
    /// [`SimError::InvalidInput`] when the set fails validation.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationReport> {
        validate_processes(processes).map_err(SimError::InvalidInput)?;
        info!(
            processes = processes.len(),
            algorithms = self.schedulers.len(),
            parallel = self.config.parallel,
            "starting simulation"
        );

        let runs = if self.config.parallel {
            self.run_parallel(processes)
        } else {
            self.schedulers
                .iter()
                .map(|(kind, scheduler)| run_one(*kind, scheduler.as_ref(), processes))
                .collect()
        };

        Ok(SimulationReport {
            seed: None,
            time_quantum: self.config.time_quantum,
            input: processes.to_vec(),
            runs,
        })
    }

    fn run_parallel(&self, processes: &[Process]) -> Vec<AlgorithmRun> {
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .schedulers
                .iter()
                .map(|(kind, scheduler)| {
                    let kind = *kind;
                    let scheduler = scheduler.as_ref();
                    scope.spawn(move || run_one(kind, scheduler, processes))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}

#[instrument(name = "algorithm", skip(scheduler, processes), fields(name = scheduler.name()))]
fn run_one(kind: AlgorithmKind, scheduler: &dyn Scheduler, processes: &[Process]) -> AlgorithmRun {
    let schedule = scheduler.schedule(processes);
    let metrics = ScheduleMetrics::calculate(&schedule.completed);
    info!(
        avg_turnaround = metrics.avg_turnaround,
        avg_waiting = metrics.avg_waiting,
        cpu_utilization = metrics.cpu_utilization,
        makespan = metrics.makespan,
        "algorithm finished"
    );

    AlgorithmRun {
        algorithm: kind,
        name: scheduler.name().to_string(),
        schedule,
        metrics,
    }
}

/// Loads a process set from a JSON array of process specs.
///
/// ```json
/// [{"id": 0, "arrival_time": 0, "burst_time": 5, "priority": 2}]
/// ```
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_processes(&text)
}

/// Parses a process set from JSON text.
pub fn parse_processes(json: &str) -> Result<Vec<Process>> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(json)?;
    Ok(specs.into_iter().map(Process::from).collect())
}
