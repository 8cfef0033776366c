//! Capacity-constrained batch scheduler and KPI evaluation.
//!
//! Packs print jobs into successive printer runs. A run holds at most
//! `max_items` jobs with at most `max_volume` cumulative volume; all jobs in
//! a run print in parallel and the run lasts as long as its slowest job.
//!
//! # Algorithm
//!
//! Jobs are offered in priority order (lower value first, input order on
//! ties) and packed greedily: a job that does not fit the open run closes
//! it and starts a new one. Jobs are never split or reordered to fill gaps.
//!
//! # KPI
//!
//! `ScheduleKpi` computes run count, total time, volume and slot
//! utilization, and idle print-head time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 8 (batch processing)
//! - Coffman et al. (1996), "Approximation Algorithms for Bin Packing: A Survey"

mod batch;
mod kpi;
mod request;

pub use batch::BatchScheduler;
pub use kpi::ScheduleKpi;
pub use request::{admission_order, schedule_batch, AdmissionPolicy, BatchRequest};
