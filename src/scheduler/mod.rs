//! CPU scheduling algorithms and schedule metrics.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection key |
//! |-----------|-----------|---------------|
//! | [`Fcfs`] | no | arrival |
//! | [`ShortestJobFirst`] | either | burst / remaining time |
//! | [`RoundRobin`] | by quantum | queue order |
//! | [`PriorityScheduling`] | either | priority |
//!
//! Every scheduler takes the process set by shared reference and simulates
//! a private copy, so one input can feed any number of runs.
//!
//! # Metrics
//!
//! [`ScheduleMetrics`] reduces a schedule to average turnaround, average
//! waiting and the CPU utilization index.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod dispatch;
mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use metrics::ScheduleMetrics;
pub use priority::PriorityScheduling;
pub use round_robin::{Admission, RoundRobin};
pub use sjf::ShortestJobFirst;

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::{Process, Schedule};

/// A CPU scheduling discipline.
pub trait Scheduler: Send + Sync + Debug {
    /// Display name (e.g., "FCFS", "Round Robin").
    fn name(&self) -> &'static str;

    /// Simulates the discipline over a copy of `processes`.
    ///
    /// The returned schedule lists completed processes in completion order.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// The built-in algorithms, in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// First-come-first-served.
    Fcfs,
    /// Shortest-job-first, run to completion.
    SjfNonPreemptive,
    /// Shortest remaining time first.
    SjfPreemptive,
    /// Round robin.
    RoundRobin,
    /// Priority, run to completion.
    PriorityNonPreemptive,
    /// Priority, re-evaluated every tick.
    PriorityPreemptive,
}

impl AlgorithmKind {
    /// All algorithms in canonical order.
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::SjfNonPreemptive,
        AlgorithmKind::SjfPreemptive,
        AlgorithmKind::RoundRobin,
        AlgorithmKind::PriorityNonPreemptive,
        AlgorithmKind::PriorityPreemptive,
    ];

    /// Short command-line key.
    pub fn key(self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "fcfs",
            AlgorithmKind::SjfNonPreemptive => "sjf",
            AlgorithmKind::SjfPreemptive => "srtf",
            AlgorithmKind::RoundRobin => "rr",
            AlgorithmKind::PriorityNonPreemptive => "priority",
            AlgorithmKind::PriorityPreemptive => "priority-preemptive",
        }
    }

    /// Builds the scheduler. Only round robin uses the quantum and admission.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] for round robin with `time_quantum <= 0`.
    pub fn build(self, time_quantum: i64, admission: Admission) -> Result<Box<dyn Scheduler>> {
        let scheduler: Box<dyn Scheduler> = match self {
            AlgorithmKind::Fcfs => Box::new(Fcfs),
            AlgorithmKind::SjfNonPreemptive => Box::new(ShortestJobFirst::non_preemptive()),
            AlgorithmKind::SjfPreemptive => Box::new(ShortestJobFirst::preemptive()),
            AlgorithmKind::RoundRobin => {
                Box::new(RoundRobin::new(time_quantum)?.with_admission(admission))
            }
            AlgorithmKind::PriorityNonPreemptive => Box::new(PriorityScheduling::non_preemptive()),
            AlgorithmKind::PriorityPreemptive => Box::new(PriorityScheduling::preemptive()),
        };
        Ok(scheduler)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_ascii_lowercase();
        let aliases = |kind: AlgorithmKind| -> [&'static str; 2] {
            match kind {
                AlgorithmKind::Fcfs => ["fcfs", "fifo"],
                AlgorithmKind::SjfNonPreemptive => ["sjf", "sjf-non-preemptive"],
                AlgorithmKind::SjfPreemptive => ["srtf", "sjf-preemptive"],
                AlgorithmKind::RoundRobin => ["rr", "round-robin"],
                AlgorithmKind::PriorityNonPreemptive => ["priority", "priority-non-preemptive"],
                AlgorithmKind::PriorityPreemptive => ["priority-preemptive", "ppriority"],
            }
        };
        AlgorithmKind::ALL
            .into_iter()
            .find(|&kind| aliases(kind).contains(&wanted.as_str()))
            .ok_or_else(|| {
                let known: Vec<_> = AlgorithmKind::ALL.iter().map(|k| k.key()).collect();
                SimError::InvalidConfig(format!(
                    "unknown algorithm '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}
