//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by configuration, input loading and simulation setup.
///
/// Scheduling itself is infallible; everything here is detected before the
/// first tick is simulated.
#[derive(Debug, Error)]
pub enum SimError {
    /// Round-robin quantum was zero or negative.
    #[error("invalid time quantum {0}: must be a positive number of ticks")]
    InvalidQuantum(i64),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The process set failed validation.
    #[error("invalid process set: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or value was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_quantum_message() {
        let err = SimError::InvalidQuantum(0);
        assert_eq!(
            err.to_string(),
            "invalid time quantum 0: must be a positive number of ticks"
        );
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = SimError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::ZeroBurst, "Process 2 has zero burst time"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process set: Duplicate process ID: 1; Process 2 has zero burst time"
        );
    }
}
