//! First-Come-First-Served scheduling.

use tracing::debug;

use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Schedule, Tick};

/// First-Come-First-Served.
///
/// Non-preemptive. Processes run in ascending arrival order; equal arrivals
/// keep their input order. The CPU idles across gaps between arrivals.
///
/// # Example
///
/// ```
/// use u_procsim::models::Process;
/// use u_procsim::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![
///     Process::new(0, 0, 5),
///     Process::new(1, 1, 3),
///     Process::new(2, 2, 8),
/// ];
/// let schedule = Fcfs.schedule(&processes);
/// let completions: Vec<u64> = schedule.completed.iter().map(|p| p.completion_time).collect();
/// assert_eq!(completions, vec![5, 8, 16]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let order = RuleEngine::new().with_rule(rules::Fifo).sort_indices(processes);
        let mut schedule = Schedule::new();
        let mut clock: Tick = 0;

        for idx in order {
            let mut process = processes[idx].clone();
            if clock < process.arrival_time {
                debug!(from = clock, until = process.arrival_time, "cpu idle");
                clock = process.arrival_time;
            }

            let start = clock;
            clock += process.run_for(process.burst_time);
            process.complete(clock);
            debug!(pid = process.id, start, completion = clock, "dispatched");

            schedule.record_slice(process.id, start, clock);
            schedule.record_completion(process);
        }

        schedule
    }
}
