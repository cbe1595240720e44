//! Round-robin scheduling.
//!
//! # Admission
//!
//! Two admission policies decide when a process enters the ready queue:
//!
//! | Policy | Queue seeding | Not-yet-arrived head |
//! |--------|---------------|----------------------|
//! | [`Admission::ArrivalGated`] | by arrival, as the clock reaches it | never queued |
//! | [`Admission::QueueOrder`] | whole input, input order | clock jumps to its arrival |
//!
//! Under `ArrivalGated`, processes arriving during a slice are queued ahead
//! of the preempted process. With a quantum of at least the longest burst it
//! degenerates to FCFS.

use std::collections::VecDeque;
use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;
use std::vec::IntoIter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::error::{Result, SimError};
use crate::models::{Process, Schedule, Tick};

/// When processes enter the round-robin ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Admission {
    /// Processes join the queue once the clock reaches their arrival.
    #[default]
    ArrivalGated,
    /// Every process is queued up front in input order and re-queued
    /// without re-checking arrival.
    QueueOrder,
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Admission::ArrivalGated => write!(f, "arrival-gated"),
            Admission::QueueOrder => write!(f, "queue-order"),
        }
    }
}

impl FromStr for Admission {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gated" | "arrival-gated" => Ok(Admission::ArrivalGated),
            "queue-order" | "queue" => Ok(Admission::QueueOrder),
            other => Err(SimError::InvalidConfig(format!(
                "unknown round-robin admission '{other}' (expected 'gated' or 'queue-order')"
            ))),
        }
    }
}

/// Round robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_procsim::models::Process;
/// use u_procsim::scheduler::{RoundRobin, Scheduler};
///
/// assert!(RoundRobin::new(0).is_err());
///
/// let rr = RoundRobin::new(2).unwrap();
/// let schedule = rr.schedule(&[Process::new(0, 0, 3), Process::new(1, 0, 2)]);
/// assert_eq!(schedule.completion_order(), vec![1, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Tick,
    admission: Admission,
}

impl RoundRobin {
    /// Creates a round-robin scheduler.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] when `time_quantum <= 0`.
    pub fn new(time_quantum: i64) -> Result<Self> {
        let quantum = Tick::try_from(time_quantum)
            .ok()
            .filter(|&q| q > 0)
            .ok_or(SimError::InvalidQuantum(time_quantum))?;
        Ok(Self {
            quantum,
            admission: Admission::default(),
        })
    }

    /// Sets the admission policy.
    pub fn with_admission(mut self, admission: Admission) -> Self {
        self.admission = admission;
        self
    }

    /// Ticks per dispatch slice.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }

    /// Admission policy in use.
    pub fn admission(&self) -> Admission {
        self.admission
    }

    fn schedule_queue_order(&self, processes: &[Process]) -> Schedule {
        let mut procs = processes.to_vec();
        let mut queue: VecDeque<usize> = (0..procs.len()).collect();
        let mut schedule = Schedule::new();
        let mut clock: Tick = 0;

        while let Some(idx) = queue.pop_front() {
            let process = &mut procs[idx];
            if process.arrival_time > clock {
                debug!(
                    from = clock,
                    until = process.arrival_time,
                    "clock advanced to head arrival"
                );
                clock = process.arrival_time;
            }

            let start = clock;
            clock += process.run_for(self.quantum);
            schedule.record_slice(process.id, start, clock);

            if process.has_work() {
                debug!(
                    pid = process.id,
                    start,
                    end = clock,
                    remaining = process.remaining_time,
                    "requeued"
                );
                queue.push_back(idx);
            } else {
                process.complete(clock);
                debug!(pid = process.id, completion = clock, "completed");
                schedule.record_completion(process.clone());
            }
        }

        schedule
    }

    fn schedule_arrival_gated(&self, processes: &[Process]) -> Schedule {
        let mut procs = processes.to_vec();
        let mut arrivals = RuleEngine::new()
            .with_rule(rules::Fifo)
            .sort_indices(&procs)
            .into_iter()
            .peekable();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(procs.len());
        let mut schedule = Schedule::new();
        let mut clock: Tick = 0;

        loop {
            admit_arrivals(&mut arrivals, &procs, clock, &mut queue);

            let Some(idx) = queue.pop_front() else {
                match arrivals.peek() {
                    Some(&next) => {
                        let until = procs[next].arrival_time;
                        debug!(from = clock, until, "cpu idle");
                        clock = until;
                        continue;
                    }
                    None => break,
                }
            };

            let start = clock;
            let process = &mut procs[idx];
            clock += process.run_for(self.quantum);
            schedule.record_slice(process.id, start, clock);

            if !process.has_work() {
                process.complete(clock);
                debug!(pid = process.id, completion = clock, "completed");
                schedule.record_completion(process.clone());
                continue;
            }

            debug!(
                pid = process.id,
                start,
                end = clock,
                remaining = process.remaining_time,
                "preempted"
            );
            // arrivals during the slice queue ahead of the preempted process
            admit_arrivals(&mut arrivals, &procs, clock, &mut queue);
            queue.push_back(idx);
        }

        schedule
    }
}

fn admit_arrivals(
    arrivals: &mut Peekable<IntoIter<usize>>,
    procs: &[Process],
    clock: Tick,
    queue: &mut VecDeque<usize>,
) {
    while let Some(idx) = arrivals.next_if(|&i| procs[i].has_arrived(clock)) {
        queue.push_back(idx);
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        match self.admission {
            Admission::ArrivalGated => self.schedule_arrival_gated(processes),
            Admission::QueueOrder => self.schedule_queue_order(processes),
        }
    }
}
