//! Ready-set simulation loops shared by SJF and priority scheduling.
//!
//! # Algorithm
//!
//! Both loops keep a pending pool of indices into a private copy of the
//! process set and recompute the ready set (pending and arrived) at every
//! decision. The best ready process is chosen by a [`RuleEngine`].
//!
//! - **Non-preemptive**: the chosen process runs its whole burst.
//! - **Preemptive**: the chosen process runs one tick, then the ready set is
//!   re-evaluated.
//!
//! When nothing is ready the clock jumps to the next arrival. This yields
//! the same results as advancing one idle tick at a time.
//!
//! # Complexity
//! Non-preemptive: O(n²). Preemptive: O(B · n) where B = total burst.

use tracing::{debug, trace};

use crate::dispatching::{PendingPool, RuleEngine};
use crate::models::{Process, Schedule, Tick};

/// Runs each dispatched process to completion.
pub(crate) fn run_to_completion(processes: &[Process], engine: &RuleEngine) -> Schedule {
    let mut procs = processes.to_vec();
    let mut pool = PendingPool::new(&procs);
    let mut schedule = Schedule::new();
    let mut clock: Tick = 0;

    while !pool.is_empty() {
        let ready = pool.ready(&procs, clock);
        let Some(idx) = engine.select_best(&procs, &ready) else {
            match idle_until_next_arrival(&pool, &procs, clock) {
                Some(next) => clock = next,
                None => break,
            }
            continue;
        };

        let start = clock;
        let process = &mut procs[idx];
        clock += process.run_for(process.remaining_time);
        process.complete(clock);
        debug!(
            pid = process.id,
            start,
            completion = clock,
            ready = ready.len(),
            "dispatched to completion"
        );

        schedule.record_slice(process.id, start, clock);
        schedule.record_completion(process.clone());
        pool.remove(idx);
    }

    schedule
}

/// Re-evaluates the ready set every tick and runs the best process for one tick.
pub(crate) fn run_preemptive(processes: &[Process], engine: &RuleEngine) -> Schedule {
    let mut procs = processes.to_vec();
    let mut pool = PendingPool::new(&procs);
    let mut schedule = Schedule::new();
    let mut clock: Tick = 0;

    while !pool.is_empty() {
        let ready = pool.ready(&procs, clock);
        let Some(idx) = engine.select_best(&procs, &ready) else {
            match idle_until_next_arrival(&pool, &procs, clock) {
                Some(next) => clock = next,
                None => break,
            }
            continue;
        };

        let start = clock;
        let process = &mut procs[idx];
        clock += process.run_for(1);
        schedule.record_slice(process.id, start, clock);
        trace!(tick = start, pid = process.id, remaining = process.remaining_time);

        if !process.has_work() {
            process.complete(clock);
            debug!(pid = process.id, completion = clock, "completed");
            schedule.record_completion(process.clone());
            pool.remove(idx);
        }
    }

    schedule
}

fn idle_until_next_arrival(pool: &PendingPool, procs: &[Process], clock: Tick) -> Option<Tick> {
    let next = pool.next_arrival(procs)?;
    debug!(from = clock, until = next, "cpu idle");
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_run_to_completion_idles_until_arrival() {
        let processes = vec![Process::new(0, 3, 2), Process::new(1, 10, 1)];
        let schedule = run_to_completion(&processes, &RuleEngine::keyed_by(rules::Spt));

        assert_eq!(schedule.completion_order(), vec![0, 1]);
        assert_eq!(schedule.completion_of(0).unwrap().completion_time, 5);
        assert_eq!(schedule.completion_of(1).unwrap().completion_time, 11);
        assert_eq!(schedule.idle_time(), 8);
    }

    #[test]
    fn test_run_preemptive_merges_slices() {
        let processes = vec![Process::new(0, 0, 3)];
        let schedule = run_preemptive(&processes, &RuleEngine::keyed_by(rules::Srpt));

        assert_eq!(schedule.slices.len(), 1);
        assert_eq!(schedule.slices[0].duration(), 3);
        assert_eq!(schedule.completion_of(0).unwrap().completion_time, 3);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let processes = vec![Process::new(0, 0, 4), Process::new(1, 1, 2)];
        let before = processes.clone();
        let _ = run_preemptive(&processes, &RuleEngine::keyed_by(rules::Srpt));
        let _ = run_to_completion(&processes, &RuleEngine::keyed_by(rules::Spt));
        assert_eq!(processes, before);
    }

    #[test]
    fn test_zero_burst_completes_on_arrival() {
        let processes = vec![Process::new(0, 2, 0), Process::new(1, 0, 1)];
        let schedule = run_preemptive(&processes, &RuleEngine::keyed_by(rules::Srpt));

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.completion_of(0).unwrap().completion_time, 2);
    }

    #[test]
    fn test_empty_input() {
        let engine = RuleEngine::keyed_by(rules::Priority);
        assert!(run_to_completion(&[], &engine).is_empty());
        assert!(run_preemptive(&[], &engine).is_empty());
    }
}
