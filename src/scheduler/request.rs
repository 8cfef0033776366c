//! Priority-ordered batch admission.
//!
//! # Algorithm
//!
//! Jobs are offered in rounds of increasing priority threshold. Each round
//! scans the not-yet-admitted jobs in input order and submits every job
//! whose priority is at or below the threshold. The result is the same as
//! a stable sort by priority, which is what [`AdmissionPolicy::StableSort`]
//! computes directly.
//!
//! # Complexity
//! - `RoundScan`: O(r * n) where r = distinct priorities, n = jobs.
//! - `StableSort`: O(n log n).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::BatchScheduler;
use crate::error::Result;
use crate::models::{PrintJob, PrintSchedule, PrinterCapacity};
use crate::validation::validate_jobs;

/// How the admission order is computed.
///
/// Both policies yield the same order; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionPolicy {
    /// Repeated full scans with a rising priority threshold.
    RoundScan,
    /// One stable sort by `(priority, input index)`.
    #[default]
    StableSort,
}

/// Input container for batch scheduling.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Jobs to schedule, in input order.
    pub jobs: Vec<PrintJob>,
    /// Printer capacity.
    pub capacity: PrinterCapacity,
    /// Admission order policy.
    pub policy: AdmissionPolicy,
}

impl BatchRequest {
    /// Creates a request with the default admission policy.
    pub fn new(jobs: Vec<PrintJob>, capacity: PrinterCapacity) -> Self {
        Self {
            jobs,
            capacity,
            policy: AdmissionPolicy::default(),
        }
    }

    /// Sets the admission policy.
    pub fn with_policy(mut self, policy: AdmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the jobs, admits them in priority order, and finalizes.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`](crate::Error::InvalidInput) if validation fails.
    /// - [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) if any
    ///   job is larger than the printer. No partial schedule is returned.
    pub fn run(&self) -> Result<PrintSchedule> {
        run_batch(&self.jobs, self.capacity, self.policy)
    }
}

/// Schedules jobs with the default admission policy.
///
/// # Example
///
/// ```
/// use u_batch::models::{PrintJob, PrinterCapacity};
/// use u_batch::scheduler::schedule_batch;
///
/// let jobs = vec![
///     PrintJob::new("M1", 100.0, 1, 120),
///     PrintJob::new("M2", 150.0, 1, 90),
///     PrintJob::new("M3", 120.0, 1, 150),
/// ];
/// let schedule = schedule_batch(&jobs, PrinterCapacity::new(300.0, 2)).unwrap();
/// assert_eq!(schedule.print_order, vec!["M1", "M2", "M3"]);
/// assert_eq!(schedule.total_time, 270);
/// ```
pub fn schedule_batch(jobs: &[PrintJob], capacity: PrinterCapacity) -> Result<PrintSchedule> {
    run_batch(jobs, capacity, AdmissionPolicy::default())
}

#[instrument(skip(jobs, capacity), fields(job_count = jobs.len()))]
fn run_batch(
    jobs: &[PrintJob],
    capacity: PrinterCapacity,
    policy: AdmissionPolicy,
) -> Result<PrintSchedule> {
    validate_jobs(jobs, &capacity)?;

    let mut scheduler = BatchScheduler::new(capacity);
    for idx in admission_order(jobs, policy) {
        scheduler.submit(&jobs[idx])?;
    }
    let schedule = scheduler.finalize();

    debug!(
        runs = schedule.run_count(),
        total_time = schedule.total_time,
        "batch scheduled"
    );
    Ok(schedule)
}

/// Indices of `jobs` in the order they are offered to the printer.
///
/// Does not validate `jobs`; any `u32` priority, including 0, is ordered
/// the same way by both policies.
pub fn admission_order(jobs: &[PrintJob], policy: AdmissionPolicy) -> Vec<usize> {
    match policy {
        AdmissionPolicy::RoundScan => round_scan_order(jobs),
        AdmissionPolicy::StableSort => stable_sort_order(jobs),
    }
}

fn round_scan_order(jobs: &[PrintJob]) -> Vec<usize> {
    let mut admitted = vec![false; jobs.len()];
    let mut order = Vec::with_capacity(jobs.len());

    // Each round raises the threshold to the lowest priority still waiting.
    while let Some(threshold) = jobs
        .iter()
        .zip(&admitted)
        .filter(|&(_, &done)| !done)
        .map(|(job, _)| job.priority)
        .min()
    {
        for (idx, job) in jobs.iter().enumerate() {
            if !admitted[idx] && job.priority <= threshold {
                admitted[idx] = true;
                order.push(idx);
            }
        }
    }

    order
}

fn stable_sort_order(jobs: &[PrintJob]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by_key(|&idx| jobs[idx].priority);
    order
}
