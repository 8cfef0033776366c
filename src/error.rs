//! Error type for batch scheduling and rod cutting.

use std::fmt::{self, Display};

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for scheduling and cutting calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A job's volume alone exceeds the printer's `max_volume`, so it can
    /// never be placed in any run.
    CapacityExceeded {
        /// The rejected job.
        job_id: String,
        /// The job's volume.
        volume: f64,
        /// The printer's per-run volume limit.
        max_volume: f64,
    },
    /// A rod length was negative.
    InvalidLength(i64),
    /// The input failed validation. Holds every problem found.
    InvalidInput(Vec<ValidationError>),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                job_id,
                volume,
                max_volume,
            } => write!(
                f,
                "Job '{job_id}' has volume {volume} which exceeds printer capacity {max_volume}"
            ),
            Self::InvalidLength(length) => {
                write!(f, "Rod length must be non-negative, got {length}")
            }
            Self::InvalidInput(errors) => {
                write!(f, "Invalid input ({} problem(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
