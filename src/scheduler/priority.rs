//! Priority scheduling, non-preemptive and preemptive.

use super::dispatch::{run_preemptive, run_to_completion};
use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Schedule};

/// Static-priority scheduling (1 = highest priority).
///
/// Same machinery as [`ShortestJobFirst`](super::ShortestJobFirst), keyed by
/// `priority`. Ties go to the earlier arrival, then to the lower process ID.
///
/// Waiting time is `turnaround - burst_time` in both modes; the preemptive
/// mode consumes `remaining_time` and never touches `burst_time`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling {
    preemptive: bool,
}

impl PriorityScheduling {
    /// Non-preemptive priority scheduling.
    pub fn non_preemptive() -> Self {
        Self { preemptive: false }
    }

    /// Preemptive priority scheduling.
    pub fn preemptive() -> Self {
        Self { preemptive: true }
    }

    /// Whether running processes can be preempted.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for PriorityScheduling {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "Priority Scheduling (Preemptive)"
        } else {
            "Priority Scheduling (Non-Preemptive)"
        }
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let engine = RuleEngine::keyed_by(rules::Priority);
        if self.preemptive {
            run_preemptive(processes, &engine)
        } else {
            run_to_completion(processes, &engine)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(0, 0, 4).with_priority(3),
            Process::new(1, 1, 3).with_priority(1),
            Process::new(2, 2, 2).with_priority(2),
            Process::new(3, 2, 1).with_priority(1),
        ]
    }

    #[test]
    fn test_priority_non_preemptive() {
        let schedule = PriorityScheduling::non_preemptive().schedule(&sample());

        // P0 0-4, then P1 (prio 1, earlier) 4-7, P3 7-8, P2 8-10
        assert_eq!(schedule.completion_order(), vec![0, 1, 3, 2]);
        assert_eq!(schedule.completion_of(2).unwrap().completion_time, 10);
        assert_eq!(schedule.completion_of(3).unwrap().waiting_time, 5);
    }

    #[test]
    fn test_priority_preemptive() {
        let schedule = PriorityScheduling::preemptive().schedule(&sample());

        // P0 0-1, P1 1-4, P3 4-5, P2 5-7, P0 7-10
        assert_eq!(schedule.completion_order(), vec![1, 3, 2, 0]);
        let p0 = schedule.completion_of(0).unwrap();
        assert_eq!(p0.completion_time, 10);
        assert_eq!(p0.turnaround_time, 10);
        // measured against the original burst, not the drained counter
        assert_eq!(p0.waiting_time, 6);
        assert_eq!(p0.burst_time, 4);
    }

    #[test]
    fn test_preemptive_waiting_matches_other_algorithms() {
        let schedule = PriorityScheduling::preemptive().schedule(&sample());
        for p in &schedule.completed {
            assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
            assert_eq!(p.remaining_time, 0);
        }
    }

    #[test]
    fn test_idle_before_first_arrival() {
        let processes = vec![Process::new(0, 5, 2).with_priority(4)];
        let schedule = PriorityScheduling::preemptive().schedule(&processes);
        assert_eq!(schedule.completion_of(0).unwrap().completion_time, 7);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            PriorityScheduling::non_preemptive().name(),
            "Priority Scheduling (Non-Preemptive)"
        );
        assert_eq!(
            PriorityScheduling::preemptive().name(),
            "Priority Scheduling (Preemptive)"
        );
    }
}
