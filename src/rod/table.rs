//! Bottom-up tabulated rod cutting.
//!
//! # Complexity
//! O(n * min(n, P)) time, O(n) space.

use tracing::{debug, instrument};

use super::checked_length;
use crate::error::Result;
use crate::models::{CutPlan, PriceTable};
use crate::validation::validate_rod;

/// Solves a rod cutting instance by filling the profit table bottom-up.
///
/// `profit[n]` holds the best profit for length `n` and `first[n]` the
/// first piece of that plan; the piece list is read back by following
/// `first` from `length` down to 0.
///
/// # Errors
/// - [`Error::InvalidLength`](crate::Error::InvalidLength) if `length` is negative.
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) for negative
///   prices, or a positive length with an empty table.
///
/// # Example
///
/// ```
/// use u_batch::models::PriceTable;
/// use u_batch::rod::cut_rod_table;
///
/// let plan = cut_rod_table(4, &PriceTable::new(vec![3, 5, 6, 7])).unwrap();
/// assert_eq!(plan.profit, 12);
/// assert_eq!(plan.pieces, vec![1, 1, 1, 1]);
/// assert_eq!(plan.piece_count(), 4);
/// assert_eq!(plan.cut_count(), 3);
/// ```
#[instrument(skip(prices), fields(table_len = prices.len()))]
pub fn cut_rod_table(length: i64, prices: &PriceTable) -> Result<CutPlan> {
    let length = checked_length(length)?;
    validate_rod(length, prices)?;

    let mut profit = vec![0i64; length + 1];
    let mut first: Vec<Option<usize>> = vec![None; length + 1];

    for n in 1..=length {
        for (idx, &price) in prices.as_slice().iter().take(n).enumerate() {
            let piece = idx + 1;
            let candidate = profit[n - piece].saturating_add(price);
            if first[n].is_none() || candidate > profit[n] {
                profit[n] = candidate;
                first[n] = Some(piece);
            }
        }
    }

    let mut pieces = Vec::new();
    let mut rest = length;
    while let Some(piece) = first[rest] {
        pieces.push(piece);
        rest -= piece;
    }

    debug!(profit = profit[length], pieces = pieces.len(), "tabulated rod cut solved");
    Ok(CutPlan::new(profit[length], pieces))
}
