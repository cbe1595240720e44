//! Scheduling domain models.
//!
//! Provides the data types every algorithm consumes and produces.
//!
//! # Domain Mappings
//!
//! | u-procsim | Textbook term | Job-shop analogue |
//! |-----------|---------------|-------------------|
//! | Process | Process / PCB | Job |
//! | Slice | Gantt bar | Assignment |
//! | Schedule | Gantt chart + results | Production plan |

mod process;
mod schedule;

pub use process::{Process, ProcessSpec, HIGHEST_PRIORITY};
pub use schedule::{Schedule, Slice};

/// Process identifier.
pub type Pid = u32;

/// Simulated clock tick.
pub type Tick = u64;
