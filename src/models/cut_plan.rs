//! Rod cut plan (solution) model.

use serde::{Deserialize, Serialize};

/// The best decomposition of a rod into priced pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Total sale price of the pieces.
    pub profit: i64,
    /// Piece lengths in the order they were chosen (not sorted).
    pub pieces: Vec<usize>,
}

impl CutPlan {
    /// The plan for a zero-length rod.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a plan.
    pub fn new(profit: i64, pieces: Vec<usize>) -> Self {
        Self { profit, pieces }
    }

    /// Number of pieces.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Number of cut points (`pieces - 1`, 0 for an uncut or empty rod).
    #[inline]
    pub fn cut_count(&self) -> usize {
        self.pieces.len().saturating_sub(1)
    }

    /// Sum of the piece lengths.
    pub fn total_length(&self) -> usize {
        self.pieces.iter().sum()
    }
}
