//! Schedule (simulation result) model.
//!
//! A schedule is the outcome of one algorithm run: the completed processes
//! in completion order, plus the execution timeline of CPU slices.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};

use super::{Pid, Process, Tick};

/// Result of running one scheduling algorithm over a process set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Completed processes, in completion order.
    pub completed: Vec<Process>,
    /// CPU slices in execution order. Idle gaps are not recorded.
    pub slices: Vec<Slice>,
}

/// A contiguous interval `[start, end)` during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process.
    pub pid: Pid,
    /// First tick of the slice.
    pub start: Tick,
    /// Tick right after the last unit of work.
    pub end: Tick,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(pid: Pid, start: Tick, end: Tick) -> Self {
        Self { pid, start, end }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `pid` ran during `[start, end)`.
    ///
    /// Zero-length slices are dropped. A slice that continues the previous
    /// slice of the same process is merged into it.
    pub fn record_slice(&mut self, pid: Pid, start: Tick, end: Tick) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice::new(pid, start, end));
    }

    /// Appends a completed process.
    pub fn record_completion(&mut self, process: Process) {
        self.completed.push(process);
    }

    /// Makespan: latest completion time (0 when empty).
    pub fn makespan(&self) -> Tick {
        self.completed
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Ticks the CPU sat idle before the makespan.
    pub fn idle_time(&self) -> Tick {
        self.makespan().saturating_sub(self.busy_time())
    }

    /// Finds the completed record for a process.
    pub fn completion_of(&self, pid: Pid) -> Option<&Process> {
        self.completed.iter().find(|p| p.id == pid)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<Pid> {
        self.completed.iter().map(|p| p.id).collect()
    }

    /// Returns all slices for a given process.
    pub fn slices_for(&self, pid: Pid) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Number of completed processes.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no process was completed.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
