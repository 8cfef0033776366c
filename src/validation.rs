//! Input validation for batch scheduling and rod cutting.
//!
//! Checks structural integrity of jobs, printer capacity, and price tables
//! before any solver runs. Detects:
//! - Duplicate job IDs
//! - Non-positive or non-finite volumes
//! - Zero priorities
//! - Non-positive print durations
//! - Empty capacity with jobs to place
//! - Negative prices
//! - A positive rod length with nothing to cut it into
//!
//! A job larger than the printer is not a validation problem: it is
//! reported by the scheduler as [`Error::CapacityExceeded`](crate::Error).

use crate::models::{PriceTable, PrintJob, PrinterCapacity};
use std::collections::HashSet;

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
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job volume is zero, negative, or not a finite number.
    InvalidVolume,
    /// A job priority is zero.
    InvalidPriority,
    /// A job print time is zero or negative.
    InvalidDuration,
    /// The capacity admits nothing but there are jobs to place.
    EmptyCapacity,
    /// A price is negative.
    NegativePrice,
    /// A positive rod length was given with an empty price table.
    EmptyPriceTable,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a batch scheduling call.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. Every volume is finite and positive
/// 3. Every priority is at least 1
/// 4. Every print time is positive
/// 5. Capacity is non-empty when there is at least one job
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[PrintJob], capacity: &PrinterCapacity) -> ValidationResult {
    let mut errors = Vec::new();

    if !jobs.is_empty() && capacity.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCapacity,
            format!(
                "Capacity (max_volume {}, max_items {}) cannot hold any of {} job(s)",
                capacity.max_volume,
                capacity.max_items,
                jobs.len()
            ),
        ));
    }

    let mut ids = HashSet::new();
    for job in jobs {
        if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        push_job_errors(job, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single job on its own.
///
/// Checks volume, priority and print time; ID uniqueness needs the whole
/// job list and is left to [`validate_jobs`].
pub fn validate_job(job: &PrintJob) -> ValidationResult {
    let mut errors = Vec::new();
    push_job_errors(job, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn push_job_errors(job: &PrintJob, errors: &mut Vec<ValidationError>) {
    if !job.volume.is_finite() || job.volume <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidVolume,
            format!("Job '{}' has invalid volume {}", job.id, job.volume),
        ));
    }

    if job.priority == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPriority,
            format!("Job '{}' has priority 0 (must be >= 1)", job.id),
        ));
    }

    if job.print_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            format!("Job '{}' has non-positive print time {}", job.id, job.print_time),
        ));
    }
}

/// Validates the input of a rod cutting call.
///
/// Checks:
/// 1. No negative prices
/// 2. A positive `length` has at least one priced piece size
pub fn validate_rod(length: usize, prices: &PriceTable) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, &price) in prices.as_slice().iter().enumerate() {
        if price < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePrice,
                format!("Piece length {} has negative price {price}", idx + 1),
            ));
        }
    }

    if length > 0 && prices.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPriceTable,
            format!("Rod of length {length} cannot be cut with an empty price table"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
