//! Batch printing scheduler and rod-cutting optimizers for the U-Engine ecosystem.
//!
//! Two independent routines:
//!
//! - **Batch printing**: packs print jobs into printer runs under a fixed
//!   per-run volume and item limit, admitting jobs in priority order.
//! - **Rod cutting**: finds the maximum-profit decomposition of a rod
//!   given a price per piece length, with a memoized and a tabulated solver.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PrintJob`, `PrinterCapacity`, `PrintRun`,
//!   `PrintSchedule`, `PriceTable`, `CutPlan`
//! - **`scheduler`**: `BatchScheduler`, priority admission, `ScheduleKpi`
//! - **`rod`**: `CutCache`, `cut_rod_memo`, `cut_rod_table`
//! - **`validation`**: Input integrity checks (duplicate IDs, bad volumes, negative prices)
//! - **`generate`**: Seeded random instances for benchmarks and tests
//!
//! # Example
//!
//! ```
//! use u_batch::models::{PriceTable, PrintJob, PrinterCapacity};
//! use u_batch::rod::{cut_rod_memo, cut_rod_table};
//! use u_batch::scheduler::schedule_batch;
//!
//! let jobs = vec![
//!     PrintJob::new("M1", 100.0, 1, 120),
//!     PrintJob::new("M2", 150.0, 1, 90),
//!     PrintJob::new("M3", 120.0, 1, 150),
//! ];
//! let schedule = schedule_batch(&jobs, PrinterCapacity::new(300.0, 2))?;
//! assert_eq!(schedule.total_time, 270);
//!
//! let prices = PriceTable::new(vec![1, 5, 8, 9, 10, 17, 17, 20]);
//! assert_eq!(cut_rod_memo(8, &prices)?.profit, 22);
//! assert_eq!(cut_rod_table(8, &prices)?.profit, 22);
//! # Ok::<(), u_batch::Error>(())
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod error;
pub mod generate;
pub mod models;
pub mod rod;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
