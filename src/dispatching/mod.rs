//! Dispatching rules and rule engine for ready-set selection.
//!
//! Every algorithm that picks "the best ready process" (SJF, SRTF,
//! priority) does so through a [`RuleEngine`]: a primary rule, optional
//! tie-breaker rules, and a final tie-breaker on process ID.
//!
//! # Usage
//!
//! ```
//! use u_procsim::dispatching::{RuleEngine, TieBreaker};
//! use u_procsim::dispatching::rules;
//! use u_procsim::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let processes = vec![Process::new(0, 0, 5), Process::new(1, 0, 2)];
//! assert_eq!(engine.select_best(&processes, &[0, 1]), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
mod pool;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};
pub use pool::PendingPool;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = u64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process. Lower = dispatched first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
