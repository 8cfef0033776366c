//! Rod price table model.

use serde::{Deserialize, Serialize};

/// Prices of rod pieces, indexed by piece length.
///
/// Position `i` holds the price of a piece of length `i + 1`. The table is
/// immutable and compares by value, so two tables with the same prices are
/// the same cache key regardless of where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(Vec<i64>);

impl PriceTable {
    /// Creates a table from prices ordered by piece length.
    pub fn new(prices: Vec<i64>) -> Self {
        Self(prices)
    }

    /// Price of a piece of the given length.
    ///
    /// Returns `None` for length 0 or lengths beyond the table.
    #[inline]
    pub fn price(&self, piece_len: usize) -> Option<i64> {
        piece_len
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .copied()
    }

    /// Longest piece that has a price.
    #[inline]
    pub fn max_piece(&self) -> usize {
        self.0.len()
    }

    /// Number of prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prices as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for PriceTable {
    fn from(prices: Vec<i64>) -> Self {
        Self(prices)
    }
}

impl From<&[i64]> for PriceTable {
    fn from(prices: &[i64]) -> Self {
        Self(prices.to_vec())
    }
}

impl FromIterator<i64> for PriceTable {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
