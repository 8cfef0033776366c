//! Printer capacity model.

use serde::{Deserialize, Serialize};

/// Per-run capacity limits of a printer.
///
/// Fixed for the lifetime of a scheduling session. A run may hold at most
/// `max_items` jobs whose volumes sum to at most `max_volume`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrinterCapacity {
    /// Maximum cumulative volume per run.
    pub max_volume: f64,
    /// Maximum number of jobs per run.
    pub max_items: usize,
}

impl PrinterCapacity {
    /// Creates a new capacity.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether this capacity can hold anything at all.
    pub fn is_empty(&self) -> bool {
        self.max_items == 0 || self.max_volume.is_nan() || self.max_volume <= 0.0
    }
}
