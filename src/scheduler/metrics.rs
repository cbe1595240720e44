//! Schedule performance metrics.
//!
//! Reduces one algorithm's completed processes to comparable scalars.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | sum(turnaround) / n |
//! | Avg Waiting | sum(waiting) / n |
//! | CPU Utilization | n · sum(burst) / sum(turnaround) · 100 |
//! | Makespan | latest completion time |
//! | Busy Fraction | sum(burst) / makespan |
//!
//! The CPU utilization figure is a comparative index, not a physical
//! percentage: it exceeds 100 whenever turnaround windows overlap, which is
//! the normal case for more than one process. Busy fraction is the physical
//! share of `[0, makespan)` the CPU spent running work.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Process, Tick};

/// Aggregated metrics for one algorithm run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Utilization index; may exceed 100.
    pub cpu_utilization: f64,
    /// Latest completion time (ticks).
    pub makespan: Tick,
    /// Sum of burst times (ticks).
    pub total_burst: Tick,
    /// Busy ticks over makespan (0.0..=1.0).
    pub busy_fraction: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from completed processes.
    ///
    /// An empty slice yields all-zero metrics.
    pub fn calculate(completed: &[Process]) -> Self {
        let n = completed.len();
        if n == 0 {
            return Self::default();
        }

        // per-process times each fit in a Tick, their sums may not
        let total_turnaround: f64 = completed.iter().map(|p| p.turnaround_time as f64).sum();
        let total_waiting: f64 = completed.iter().map(|p| p.waiting_time as f64).sum();
        let total_burst: Tick = completed.iter().map(|p| p.burst_time).sum();
        let makespan = completed
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);

        let cpu_utilization = if total_turnaround > 0.0 {
            n as f64 * (total_burst as f64 / total_turnaround) * 100.0
        } else {
            0.0
        };
        if cpu_utilization > 100.0 {
            debug!(
                cpu_utilization,
                processes = n,
                "utilization index above 100 (overlapping turnaround windows)"
            );
        }

        let busy_fraction = if makespan > 0 {
            total_burst as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            process_count: n,
            avg_turnaround: total_turnaround / n as f64,
            avg_waiting: total_waiting / n as f64,
            cpu_utilization,
            makespan,
            total_burst,
            busy_fraction,
        }
    }

    /// The three headline metrics: (avg turnaround, avg waiting, CPU utilization).
    pub fn headline(&self) -> (f64, f64, f64) {
        (self.avg_turnaround, self.avg_waiting, self.cpu_utilization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(id: u32, arrival: Tick, burst: Tick, completion: Tick) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.run_for(burst);
        p.complete(completion);
        p
    }

    #[test]
    fn test_metrics_basic() {
        // FCFS of P0(0,5) P1(1,3) P2(2,8)
        let completed = vec![done(0, 0, 5, 5), done(1, 1, 3, 8), done(2, 2, 8, 16)];
        let m = ScheduleMetrics::calculate(&completed);

        assert_eq!(m.process_count, 3);
        assert!((m.avg_turnaround - 26.0 / 3.0).abs() < 1e-10); // (5+7+14)/3
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10); // (0+4+6)/3
        // 3 * 16/26 * 100
        assert!((m.cpu_utilization - 3.0 * 16.0 / 26.0 * 100.0).abs() < 1e-10);
        assert_eq!(m.makespan, 16);
        assert_eq!(m.total_burst, 16);
        assert!((m.busy_fraction - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_process_full_utilization() {
        let m = ScheduleMetrics::calculate(&[done(0, 0, 4, 4)]);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_exceeds_hundred_with_overlap() {
        let completed = vec![done(0, 0, 2, 2), done(1, 0, 2, 4)];
        let m = ScheduleMetrics::calculate(&completed);
        // 2 * (4/6) * 100
        assert!(m.cpu_utilization > 100.0);
        assert!(m.busy_fraction <= 1.0);
    }

    #[test]
    fn test_busy_fraction_with_idle() {
        let m = ScheduleMetrics::calculate(&[done(0, 6, 2, 8)]);
        assert!((m.busy_fraction - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_large_turnarounds_do_not_overflow() {
        let half = Tick::MAX / 2;
        let completed = vec![done(0, 0, half, half), done(1, 0, half - 1, Tick::MAX - 1)];
        let m = ScheduleMetrics::calculate(&completed);

        assert_eq!(m.makespan, Tick::MAX - 1);
        assert_eq!(m.total_burst, 2 * half - 1);
        assert!(m.avg_turnaround > half as f64);
        assert!(m.cpu_utilization > 0.0);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&[]);
        assert_eq!(m, ScheduleMetrics::default());
        assert_eq!(m.headline(), (0.0, 0.0, 0.0));
    }
}
