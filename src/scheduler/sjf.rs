//! Shortest-Job-First scheduling, non-preemptive and preemptive (SRTF).

use super::dispatch::{run_preemptive, run_to_completion};
use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, Schedule};

/// Shortest-Job-First.
///
/// - **Non-preemptive**: at each dispatch decision the arrived process with
///   the smallest burst runs to completion.
/// - **Preemptive** (shortest remaining time first): every tick the arrived
///   process with the smallest remaining time runs for one tick.
///
/// Ties go to the earlier arrival, then to the lower process ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst {
    preemptive: bool,
}

impl ShortestJobFirst {
    /// Non-preemptive SJF.
    pub fn non_preemptive() -> Self {
        Self { preemptive: false }
    }

    /// Preemptive SJF (SRTF).
    pub fn preemptive() -> Self {
        Self { preemptive: true }
    }

    /// Whether running processes can be preempted.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for ShortestJobFirst {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "SJF Preemptive"
        } else {
            "SJF Non-Preemptive"
        }
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        if self.preemptive {
            run_preemptive(processes, &RuleEngine::keyed_by(rules::Srpt))
        } else {
            run_to_completion(processes, &RuleEngine::keyed_by(rules::Spt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(0, 0, 8),
            Process::new(1, 1, 4),
            Process::new(2, 2, 9),
            Process::new(3, 3, 5),
        ]
    }

    #[test]
    fn test_sjf_non_preemptive() {
        let schedule = ShortestJobFirst::non_preemptive().schedule(&sample());

        // P0 runs 0-8, then shortest ready: P1 (8-12), P3 (12-17), P2 (17-26)
        assert_eq!(schedule.completion_order(), vec![0, 1, 3, 2]);
        assert_eq!(schedule.completion_of(3).unwrap().completion_time, 17);
        assert_eq!(schedule.completion_of(2).unwrap().waiting_time, 15);
    }

    #[test]
    fn test_srtf() {
        let schedule = ShortestJobFirst::preemptive().schedule(&sample());

        // P0 0-1, P1 1-5, P3 5-10, P0 10-17, P2 17-26
        assert_eq!(schedule.completion_order(), vec![1, 3, 0, 2]);
        assert_eq!(schedule.completion_of(1).unwrap().completion_time, 5);
        assert_eq!(schedule.completion_of(3).unwrap().completion_time, 10);
        assert_eq!(schedule.completion_of(0).unwrap().completion_time, 17);
        assert_eq!(schedule.completion_of(2).unwrap().completion_time, 26);
        // waiting = turnaround - original burst
        assert_eq!(schedule.completion_of(0).unwrap().waiting_time, 9);
        assert_eq!(schedule.slices_for(0).len(), 2);
    }

    #[test]
    fn test_equal_arrivals_ascending_burst() {
        let processes = vec![
            Process::new(0, 0, 6),
            Process::new(1, 0, 2),
            Process::new(2, 0, 4),
            Process::new(3, 0, 1),
        ];
        let expected = vec![3, 1, 2, 0];

        let np = ShortestJobFirst::non_preemptive().schedule(&processes);
        let p = ShortestJobFirst::preemptive().schedule(&processes);
        assert_eq!(np.completion_order(), expected);
        assert_eq!(p.completion_order(), expected);
    }

    #[test]
    fn test_burst_tie_goes_to_earlier_arrival() {
        let processes = vec![
            Process::new(0, 0, 1),
            Process::new(1, 1, 3),
            Process::new(2, 0, 3),
        ];
        let schedule = ShortestJobFirst::non_preemptive().schedule(&processes);
        assert_eq!(schedule.completion_order(), vec![0, 2, 1]);
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestJobFirst::non_preemptive().name(), "SJF Non-Preemptive");
        assert_eq!(ShortestJobFirst::preemptive().name(), "SJF Preemptive");
        assert!(ShortestJobFirst::preemptive().is_preemptive());
    }
}
