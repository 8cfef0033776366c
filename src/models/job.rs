//! Print job model.
//!
//! A print job is a single item to be produced on the printer. It occupies
//! part of the build volume and one item slot for the duration of a run.

use serde::{Deserialize, Serialize};

/// A job to be admitted into a printer run.
///
/// # Priority
/// Lower values are more urgent: all priority-1 jobs are admitted before
/// any priority-2 job, and so on. Jobs of equal priority keep their
/// input order.
///
/// # Time Representation
/// `print_time` is in abstract time units (the caller decides whether
/// these are seconds or minutes). A run lasts as long as its slowest job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Unique job identifier.
    pub id: String,
    /// Build volume occupied by the job.
    pub volume: f64,
    /// Admission priority (1 = most urgent).
    pub priority: u32,
    /// Print duration.
    pub print_time: i64,
}

impl PrintJob {
    /// Creates a new print job.
    pub fn new(id: impl Into<String>, volume: f64, priority: u32, print_time: i64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }

    /// Sets the admission priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether this job can fit into an empty run of the given volume.
    #[inline]
    pub fn fits_volume(&self, max_volume: f64) -> bool {
        self.volume <= max_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = PrintJob::new("M1", 100.0, 1, 120);
        assert_eq!(job.id, "M1");
        assert!((job.volume - 100.0).abs() < 1e-10);
        assert_eq!(job.priority, 1);
        assert_eq!(job.print_time, 120);
    }

    #[test]
    fn test_job_with_priority() {
        let job = PrintJob::new("M1", 100.0, 1, 120).with_priority(3);
        assert_eq!(job.priority, 3);
    }

    #[test]
    fn test_fits_volume() {
        let job = PrintJob::new("M1", 300.0, 1, 10);
        assert!(job.fits_volume(300.0));
        assert!(!job.fits_volume(299.9));
    }

    #[test]
    fn test_job_serde() {
        let job = PrintJob::new("M2", 150.0, 2, 90);
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"print_time\":90"));
        let back: PrintJob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
