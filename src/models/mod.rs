//! Batch printing and rod-cutting domain models.
//!
//! Provides the data types exchanged with the scheduler and the rod
//! solvers. All types are serde-serializable so callers can load
//! instances and store results in whatever format they use.
//!
//! # Domain Mappings
//!
//! | u-batch | 3D Printing | Sheet Metal | Lumber |
//! |---------|-------------|-------------|--------|
//! | PrintJob | Model to print | Part order | Cut order |
//! | PrinterCapacity | Build plate | Press bed | Saw table |
//! | PrintRun | Build | Press cycle | Batch |
//! | PriceTable | - | Offcut prices | Board-foot prices |

mod capacity;
mod cut_plan;
mod job;
mod prices;
mod schedule;

pub use capacity::PrinterCapacity;
pub use cut_plan::CutPlan;
pub use job::PrintJob;
pub use prices::PriceTable;
pub use schedule::{PrintRun, PrintSchedule};
