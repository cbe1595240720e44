//! Process (task) model.
//!
//! A process is the unit of work flowing through every scheduling
//! algorithm: fixed arrival, burst and priority inputs, one mutable
//! remaining-work counter, and timing outputs written once on completion.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::{Pid, Tick};

/// Highest scheduling priority (numerically lowest).
pub const HIGHEST_PRIORITY: u32 = 1;

/// A simulated process.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
///
/// # Derived fields
/// `completion_time`, `turnaround_time` and `waiting_time` stay zero until
/// the owning algorithm finishes the process, and are written exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: Pid,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total CPU ticks required.
    pub burst_time: Tick,
    /// CPU ticks still required. Starts at `burst_time`.
    pub remaining_time: Tick,
    /// Scheduling priority (lower = more important, 1 = highest).
    pub priority: u32,
    /// Tick at which the last unit of work finished.
    pub completion_time: Tick,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Tick,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Tick,
}

impl Process {
    /// Creates a fresh process with the highest priority.
    pub fn new(id: Pid, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority: HIGHEST_PRIORITY,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: Tick) -> bool {
        self.arrival_time <= clock
    }

    /// Whether the process still needs CPU time.
    #[inline]
    pub fn has_work(&self) -> bool {
        self.remaining_time > 0
    }

    /// Whether no derived field has been written and no work consumed.
    pub fn is_fresh(&self) -> bool {
        self.remaining_time == self.burst_time
            && self.completion_time == 0
            && self.turnaround_time == 0
            && self.waiting_time == 0
    }

    /// Consumes up to `ticks` of CPU time, returning the ticks actually used.
    pub(crate) fn run_for(&mut self, ticks: Tick) -> Tick {
        let used = ticks.min(self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Marks the process complete at `at` and derives its timing outputs.
    ///
    /// Waiting time is always measured against the original burst.
    pub(crate) fn complete(&mut self, at: Tick) {
        debug_assert!(at >= self.arrival_time + self.burst_time);
        self.remaining_time = 0;
        self.completion_time = at;
        self.turnaround_time = at - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

/// Input form of a process, as supplied by a generator or a JSON file.
///
/// Only the immutable fields are accepted; everything else is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: Pid,
    /// Arrival tick.
    pub arrival_time: Tick,
    /// CPU ticks required.
    pub burst_time: Tick,
    /// Priority (1 = highest).
    #[serde(default = "default_priority")]
    pub priority: u32,
}

fn default_priority() -> u32 {
    HIGHEST_PRIORITY
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Process::new(spec.id, spec.arrival_time, spec.burst_time).with_priority(spec.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 4, 7).with_priority(2);

        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.completion_time, 0);
        assert!(p.is_fresh());
        assert!(p.has_work());
    }

    #[test]
    fn test_process_arrival() {
        let p = Process::new(0, 5, 1);
        assert!(!p.has_arrived(4));
        assert!(p.has_arrived(5));
        assert!(p.has_arrived(6));
    }

    #[test]
    fn test_run_for_clamps_to_remaining() {
        let mut p = Process::new(0, 0, 3);
        assert_eq!(p.run_for(2), 2);
        assert_eq!(p.remaining_time, 1);
        assert!(!p.is_fresh());
        assert_eq!(p.run_for(5), 1);
        assert!(!p.has_work());
        assert_eq!(p.burst_time, 3);
    }

    #[test]
    fn test_complete_derives_timings() {
        let mut p = Process::new(1, 1, 3);
        p.run_for(3);
        p.complete(8);

        assert_eq!(p.completion_time, 8);
        assert_eq!(p.turnaround_time, 7);
        assert_eq!(p.waiting_time, 4);
    }

    #[test]
    fn test_spec_default_priority() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"id": 2, "arrival_time": 1, "burst_time": 4}"#).unwrap();
        let p = Process::from(spec);
        assert_eq!(p.priority, HIGHEST_PRIORITY);
        assert_eq!(p.remaining_time, 4);
    }
}
