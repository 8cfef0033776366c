//! Single-printer run packing state.
//!
//! # Algorithm
//!
//! 1. Keep the open run's free volume and free item slots.
//! 2. On submit, close the open run if the job does not fit it.
//! 3. Admit the job into the (possibly fresh) open run.
//! 4. On finalize, close the open run and report the schedule.
//!
//! # Complexity
//! O(1) amortized per submitted job.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::models::{PrintJob, PrintRun, PrintSchedule, PrinterCapacity};
use crate::validation::{validate_job, ValidationError, ValidationErrorKind};

/// Tracks one printer's capacity across successive runs.
///
/// Jobs are admitted greedily in the order they are submitted. The caller
/// decides that order (see [`admission_order`](super::admission_order)).
///
/// # Example
///
/// ```
/// use u_batch::models::{PrintJob, PrinterCapacity};
/// use u_batch::scheduler::BatchScheduler;
///
/// let mut printer = BatchScheduler::new(PrinterCapacity::new(300.0, 2));
/// printer.submit(&PrintJob::new("M1", 100.0, 1, 120)).unwrap();
/// printer.submit(&PrintJob::new("M2", 150.0, 1, 90)).unwrap();
/// printer.submit(&PrintJob::new("M3", 120.0, 1, 150)).unwrap();
///
/// let schedule = printer.finalize();
/// assert_eq!(schedule.total_time, 270);
/// assert_eq!(schedule.run_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BatchScheduler {
    capacity: PrinterCapacity,
    current: PrintRun,
    free_volume: f64,
    free_items: usize,
    total_time: i64,
    print_order: Vec<String>,
    runs: Vec<PrintRun>,
}

impl BatchScheduler {
    /// Creates a scheduler with an empty open run.
    pub fn new(capacity: PrinterCapacity) -> Self {
        let mut scheduler = Self {
            capacity,
            current: PrintRun::new(),
            free_volume: 0.0,
            free_items: 0,
            total_time: 0,
            print_order: Vec::new(),
            runs: Vec::new(),
        };
        scheduler.close_run();
        scheduler
    }

    /// Closes the open run and starts a fresh one.
    ///
    /// Adds the run time (longest duration, 0 if empty) to the total and
    /// restores full capacity. Empty runs are not recorded.
    pub fn close_run(&mut self) {
        let run = std::mem::take(&mut self.current);
        let run_time = run.run_time();
        self.total_time += run_time;
        self.free_volume = self.capacity.max_volume;
        self.free_items = self.capacity.max_items;

        if !run.is_empty() {
            debug!(
                run = self.runs.len(),
                items = run.item_count(),
                volume = run.volume_used,
                run_time,
                total_time = self.total_time,
                "closed print run"
            );
            self.runs.push(run);
        }
    }

    /// Admits a job, opening a new run first if it does not fit.
    ///
    /// # Errors
    /// - [`Error::CapacityExceeded`] if the job is larger than an empty run.
    /// - [`Error::InvalidInput`] if the job has a non-positive or non-finite
    ///   volume, a non-positive print time, priority 0, or the capacity holds
    ///   no items at all.
    ///
    /// On error the scheduler is left unchanged.
    pub fn submit(&mut self, job: &PrintJob) -> Result<()> {
        validate_job(job)?;
        if !job.fits_volume(self.capacity.max_volume) {
            return Err(Error::CapacityExceeded {
                job_id: job.id.clone(),
                volume: job.volume,
                max_volume: self.capacity.max_volume,
            });
        }
        if self.capacity.max_items == 0 {
            return Err(Error::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::EmptyCapacity,
                format!("Printer holds 0 items, cannot admit job '{}'", job.id),
            )]));
        }

        if job.volume > self.free_volume || self.free_items == 0 {
            self.close_run();
        }

        self.current.push(job.id.clone(), job.volume, job.print_time);
        self.print_order.push(job.id.clone());
        self.free_volume -= job.volume;
        self.free_items -= 1;

        trace!(
            job = %job.id,
            volume = job.volume,
            free_volume = self.free_volume,
            free_items = self.free_items,
            "admitted job"
        );
        Ok(())
    }

    /// Flushes the open run and returns the schedule.
    ///
    /// Consumes the scheduler, so the last run cannot be counted twice.
    pub fn finalize(mut self) -> PrintSchedule {
        self.close_run();
        PrintSchedule {
            print_order: self.print_order,
            total_time: self.total_time,
            runs: self.runs,
        }
    }

    /// Printer capacity.
    pub fn capacity(&self) -> &PrinterCapacity {
        &self.capacity
    }

    /// Volume still free in the open run.
    pub fn free_volume(&self) -> f64 {
        self.free_volume
    }

    /// Item slots still free in the open run.
    pub fn free_items(&self) -> usize {
        self.free_items
    }

    /// Time accumulated by closed runs.
    pub fn total_time(&self) -> i64 {
        self.total_time
    }

    /// Job IDs admitted so far, in order.
    pub fn print_order(&self) -> &[String] {
        &self.print_order
    }

    /// The open run.
    pub fn current_run(&self) -> &PrintRun {
        &self.current
    }

    /// Runs closed so far.
    pub fn closed_runs(&self) -> &[PrintRun] {
        &self.runs
    }

    /// Whether a job ID has been admitted.
    pub fn is_admitted(&self, job_id: &str) -> bool {
        self.print_order.iter().any(|id| id == job_id)
    }
}
