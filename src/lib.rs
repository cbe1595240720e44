//! CPU process scheduling simulator.
//!
//! Computes per-process completion, turnaround and waiting times under the
//! classical single-CPU disciplines, and aggregates them into comparable
//! metrics (average turnaround, average waiting, CPU utilization index).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Schedule`, `Slice`
//! - **`dispatching`**: Selection rules (SPT, SRPT, FIFO, PRIORITY) and the
//!   rule engine that picks from a ready set with explicit tie-breaking
//! - **`scheduler`**: FCFS, SJF, SRTF, round robin, priority (both modes),
//!   and `ScheduleMetrics`
//! - **`generator`**: Seeded random process sets
//! - **`validation`**: Input integrity checks
//! - **`simulation`**: Runs every algorithm over one input
//! - **`report`**: Text tables, bar chart and timeline rendering
//! - **`config`**: `SimulationConfig`, loadable from JSON
//!
//! # Example
//!
//! ```
//! use u_procsim::models::Process;
//! use u_procsim::scheduler::{RoundRobin, Scheduler, ScheduleMetrics};
//!
//! let processes = vec![
//!     Process::new(0, 0, 5),
//!     Process::new(1, 1, 3),
//!     Process::new(2, 2, 8),
//! ];
//! let schedule = RoundRobin::new(2).unwrap().schedule(&processes);
//! assert_eq!(schedule.completion_order(), vec![1, 0, 2]);
//!
//! let metrics = ScheduleMetrics::calculate(&schedule.completed);
//! assert_eq!(metrics.makespan, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::{Result, SimError};
