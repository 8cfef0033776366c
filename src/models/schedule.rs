//! Print run and schedule (solution) models.
//!
//! A schedule is the admission order of all jobs plus the runs they were
//! packed into. Runs are printed one after another; inside a run all jobs
//! print in parallel, so a run lasts as long as its slowest job.

use serde::{Deserialize, Serialize};

/// One batch of jobs printed together under shared capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintRun {
    /// Admitted job IDs, in admission order.
    pub job_ids: Vec<String>,
    /// Print durations, parallel to `job_ids`.
    pub durations: Vec<i64>,
    /// Cumulative volume of the admitted jobs.
    pub volume_used: f64,
}

/// A complete batch schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintSchedule {
    /// Job IDs in the order they were admitted, across all runs.
    pub print_order: Vec<String>,
    /// Sum over all runs of the run time.
    pub total_time: i64,
    /// Closed, non-empty runs in print order.
    pub runs: Vec<PrintRun>,
}

impl PrintRun {
    /// Creates an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a job to the run.
    pub fn push(&mut self, job_id: impl Into<String>, volume: f64, duration: i64) {
        self.job_ids.push(job_id.into());
        self.durations.push(duration);
        self.volume_used += volume;
    }

    /// Run time: the longest duration in the run, 0 when empty.
    #[inline]
    pub fn run_time(&self) -> i64 {
        self.durations.iter().copied().max().unwrap_or(0)
    }

    /// Number of jobs in the run.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the run holds no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

impl PrintSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of closed runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of admitted jobs.
    pub fn job_count(&self) -> usize {
        self.print_order.len()
    }

    /// Index of the run a job was printed in.
    pub fn run_index_of(&self, job_id: &str) -> Option<usize> {
        self.runs
            .iter()
            .position(|r| r.job_ids.iter().any(|id| id == job_id))
    }

    /// Position of a job in the admission order.
    pub fn position_of(&self, job_id: &str) -> Option<usize> {
        self.print_order.iter().position(|id| id == job_id)
    }
}
