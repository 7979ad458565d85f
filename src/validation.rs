//! Input validation for process batches.
//!
//! Checks the preconditions the scheduler relies on but does not enforce
//! itself. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//!
//! The scheduler accepts unvalidated batches and never panics on them, but
//! the resulting numbers are meaningless for degenerate processes.

use std::collections::HashSet;

use crate::models::{Process, ProcessBatch};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before the epoch.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the processes of a batch.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. No arrival time is negative
/// 3. No duplicate process IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates every process in `batch`.
///
/// See [`validate_processes`] for the checks.
pub fn validate_batch(batch: &ProcessBatch) -> ValidationResult {
    validate_processes(batch.processes())
}
