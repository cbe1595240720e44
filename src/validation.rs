//! Input validation for process sets.
//!
//! Checks structural integrity of a process set before it is simulated.
//! Detects:
//! - Duplicate process IDs
//! - Zero burst times
//! - Priorities outside `1..`
//! - Records that already carry simulation results
//! - Sets whose latest finish would overflow the tick clock
//!
//! All issues are collected and reported together.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Process, Tick, HIGHEST_PRIORITY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time.
    ZeroBurst,
    /// Priority is below the highest priority level.
    InvalidPriority,
    /// A process has consumed work or carries completion data.
    NotFresh,
    /// Latest arrival plus total burst does not fit in a [`Tick`].
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set before simulation.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst time is at least one tick
/// 3. Every priority is at least [`HIGHEST_PRIORITY`]
/// 4. Every record is fresh (`remaining_time == burst_time`, no derived fields)
/// 5. `max(arrival_time) + sum(burst_time)` fits in a [`Tick`], which bounds
///    every clock value a scheduler can reach
///
/// An empty set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has zero burst time", p.id),
            ));
        }

        if p.priority < HIGHEST_PRIORITY {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!(
                    "Process {} has priority {} (highest allowed is {HIGHEST_PRIORITY})",
                    p.id, p.priority
                ),
            ));
        }

        if !p.is_fresh() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NotFresh,
                format!("Process {} already carries simulation state", p.id),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time, or `None` on overflow.
fn time_horizon(processes: &[Process]) -> Option<Tick> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(0, 0, 5).with_priority(2),
            Process::new(1, 1, 3).with_priority(1),
            Process::new(2, 2, 8).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 2), Process::new(1, 3, 4)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(0, 0, 0)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroBurst);
    }

    #[test]
    fn test_priority_zero() {
        let processes = vec![Process::new(0, 0, 1).with_priority(0)];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPriority));
    }

    #[test]
    fn test_not_fresh() {
        let mut p = Process::new(0, 0, 4);
        p.remaining_time = 2;

        let errors = validate_processes(&[p]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NotFresh);
        assert_eq!(errors[0].to_string(), "Process 0 already carries simulation state");
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new(0, 0, 0),
            Process::new(0, 1, 2).with_priority(0),
        ];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_time_overflow() {
        let processes = vec![Process::new(0, Tick::MAX - 5, 10)];

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_time_overflow_from_summed_bursts() {
        let processes = vec![
            Process::new(0, 0, Tick::MAX / 2 + 1),
            Process::new(1, 0, Tick::MAX / 2 + 1),
        ];

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_time_horizon_at_limit() {
        let processes = vec![Process::new(0, Tick::MAX - 10, 4), Process::new(1, 0, 6)];
        assert!(validate_processes(&processes).is_ok());
    }
}
