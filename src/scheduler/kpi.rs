//! Batch schedule quality metrics (KPIs).
//!
//! Computes printer performance indicators from a finished schedule and
//! the capacity it was packed under.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Sum of run times |
//! | Run Count | Number of non-empty runs |
//! | Avg Volume Utilization | Mean of volume_used / max_volume per run |
//! | Avg Slot Utilization | Mean of items / max_items per run |
//! | Idle Head Time | Sum over jobs of (run time - job duration) |
//! | Longest Run | Largest single run time |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::{PrintSchedule, PrinterCapacity};

/// Batch schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Sum of run times.
    pub total_time: i64,
    /// Number of runs.
    pub run_count: usize,
    /// Number of admitted jobs.
    pub job_count: usize,
    /// Mean volume utilization per run (0.0..1.0).
    pub avg_volume_utilization: f64,
    /// Mean item-slot utilization per run (0.0..1.0).
    pub avg_slot_utilization: f64,
    /// Time print heads sit finished while waiting for the slowest job.
    pub idle_head_time: i64,
    /// Longest single run time.
    pub longest_run_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the capacity it was built for.
    pub fn calculate(schedule: &PrintSchedule, capacity: &PrinterCapacity) -> Self {
        let mut volume_util_sum = 0.0;
        let mut slot_util_sum = 0.0;
        let mut idle_head_time: i64 = 0;
        let mut longest_run_time: i64 = 0;

        for run in &schedule.runs {
            let run_time = run.run_time();
            longest_run_time = longest_run_time.max(run_time);
            idle_head_time += run.durations.iter().map(|d| run_time - d).sum::<i64>();

            if capacity.max_volume > 0.0 {
                volume_util_sum += run.volume_used / capacity.max_volume;
            }
            if capacity.max_items > 0 {
                slot_util_sum += run.item_count() as f64 / capacity.max_items as f64;
            }
        }

        let run_count = schedule.run_count();
        let (avg_volume_utilization, avg_slot_utilization) = if run_count == 0 {
            (0.0, 0.0)
        } else {
            (
                volume_util_sum / run_count as f64,
                slot_util_sum / run_count as f64,
            )
        };

        Self {
            total_time: schedule.total_time,
            run_count,
            job_count: schedule.job_count(),
            avg_volume_utilization,
            avg_slot_utilization,
            idle_head_time,
            longest_run_time,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_total_time: i64, min_volume_utilization: f64) -> bool {
        self.total_time <= max_total_time && self.avg_volume_utilization >= min_volume_utilization
    }
}
