//! Pending pool for ready-set scheduling.

use crate::models::{Process, Tick};

/// Indices of processes that have not completed yet.
///
/// The process collection itself is never restructured while a simulation
/// runs; the ready set is recomputed from this pool at every decision.
#[derive(Debug, Clone, Default)]
pub struct PendingPool {
    pending: Vec<usize>,
}

impl PendingPool {
    /// Creates a pool holding every index of `processes`.
    pub fn new(processes: &[Process]) -> Self {
        Self {
            pending: (0..processes.len()).collect(),
        }
    }

    /// Indices of pending processes that have arrived by `clock`.
    pub fn ready(&self, processes: &[Process], clock: Tick) -> Vec<usize> {
        self.pending
            .iter()
            .copied()
            .filter(|&i| processes[i].has_arrived(clock))
            .collect()
    }

    /// Earliest arrival among pending processes.
    pub fn next_arrival(&self, processes: &[Process]) -> Option<Tick> {
        self.pending
            .iter()
            .map(|&i| processes[i].arrival_time)
            .min()
    }

    /// Removes an index from the pool.
    pub fn remove(&mut self, index: usize) {
        self.pending.retain(|&i| i != index);
    }

    /// Number of pending processes.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether every process has completed.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
