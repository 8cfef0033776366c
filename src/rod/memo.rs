//! Top-down memoized rod cutting.
//!
//! # Complexity
//! O(n * min(n, P)) time, O(n) memo entries per price table, recursion
//! depth n.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::checked_length;
use crate::error::Result;
use crate::models::{CutPlan, PriceTable};
use crate::validation::validate_rod;

/// Best result for one sub-length: its profit and the first piece cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Solved {
    profit: i64,
    first_piece: usize,
}

/// Memo of solved sub-problems, keyed by price table then rod length.
///
/// Price tables are compared by value, so two structurally equal tables
/// share entries and two different tables never do. The cache lives as
/// long as the caller keeps it; drop or [`clear`](Self::clear) it to
/// release memory.
///
/// # Example
///
/// ```
/// use u_batch::models::PriceTable;
/// use u_batch::rod::CutCache;
///
/// let mut cache = CutCache::new();
/// let prices = PriceTable::new(vec![2, 5, 7, 8, 10]);
/// assert_eq!(cache.solve(5, &prices).unwrap().profit, 12);
///
/// // Sub-lengths 1..=5 are now cached.
/// assert_eq!(cache.len(), 5);
/// assert_eq!(cache.solve(3, &prices).unwrap().profit, 7);
/// assert_eq!(cache.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CutCache {
    tables: HashMap<PriceTable, HashMap<usize, Solved>>,
}

impl CutCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves a rod cutting instance, reusing and extending the memo.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`](crate::Error::InvalidLength) if `length` is negative.
    /// - [`Error::InvalidInput`](crate::Error::InvalidInput) for negative
    ///   prices, or a positive length with an empty table.
    #[instrument(skip(self, prices), fields(table_len = prices.len()))]
    pub fn solve(&mut self, length: i64, prices: &PriceTable) -> Result<CutPlan> {
        let length = checked_length(length)?;
        validate_rod(length, prices)?;

        let plan = match self.tables.get_mut(prices) {
            Some(memo) => solve_with(length, prices, memo),
            None => {
                let mut memo = HashMap::new();
                let plan = solve_with(length, prices, &mut memo);
                self.tables.insert(prices.clone(), memo);
                plan
            }
        };

        debug!(
            profit = plan.profit,
            pieces = plan.piece_count(),
            "memoized rod cut solved"
        );
        Ok(plan)
    }

    /// Number of cached sub-problems across all price tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct price tables seen.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

/// Solves a rod cutting instance with a cache scoped to this call.
///
/// # Example
///
/// ```
/// use u_batch::models::PriceTable;
/// use u_batch::rod::cut_rod_memo;
///
/// let plan = cut_rod_memo(3, &PriceTable::new(vec![1, 3, 8])).unwrap();
/// assert_eq!(plan.profit, 8);
/// assert_eq!(plan.pieces, vec![3]);
/// ```
pub fn cut_rod_memo(length: i64, prices: &PriceTable) -> Result<CutPlan> {
    CutCache::new().solve(length, prices)
}

/// Fills `memo` up to `length` and reads the plan back from it.
fn solve_with(length: usize, prices: &PriceTable, memo: &mut HashMap<usize, Solved>) -> CutPlan {
    let profit = best(length, prices, memo);

    let mut pieces = Vec::new();
    let mut rest = length;
    while let Some(solved) = memo.get(&rest) {
        pieces.push(solved.first_piece);
        rest -= solved.first_piece;
    }
    CutPlan::new(profit, pieces)
}

/// Best profit for `length`, filling `memo` for every sub-length it visits.
///
/// Top-down, but driven by an explicit work stack instead of the call
/// stack, so rod length does not bound recursion depth. A length stays on
/// the stack until all of its remainders are solved; the first unsolved
/// remainder is pushed on top of it.
///
/// Length 0 is never stored; its profit is 0 with no pieces.
fn best(length: usize, prices: &PriceTable, memo: &mut HashMap<usize, Solved>) -> i64 {
    let mut pending = vec![length];

    while let Some(&n) = pending.last() {
        if n == 0 || memo.contains_key(&n) {
            pending.pop();
            continue;
        }

        let unsolved = (1..=n.min(prices.max_piece()))
            .map(|piece| n - piece)
            .find(|&rest| rest > 0 && !memo.contains_key(&rest));
        if let Some(rest) = unsolved {
            pending.push(rest);
            continue;
        }

        if let Some(solved) = resolve(n, prices, memo) {
            memo.insert(n, solved);
        }
        pending.pop();
    }

    memo.get(&length).map_or(0, |s| s.profit)
}

/// Picks the best first piece for `n`, given every remainder is solved.
///
/// Returns `None` only when no piece size is priced.
fn resolve(n: usize, prices: &PriceTable, memo: &HashMap<usize, Solved>) -> Option<Solved> {
    let mut found: Option<Solved> = None;
    for (idx, &price) in prices.as_slice().iter().take(n).enumerate() {
        let piece = idx + 1;
        let rest = memo.get(&(n - piece)).map_or(0, |s| s.profit);
        let profit = rest.saturating_add(price);
        let better = match found {
            Some(s) => profit > s.profit,
            None => true,
        };
        if better {
            found = Some(Solved {
                profit,
                first_piece: piece,
            });
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_zero_length() {
        let plan = cut_rod_memo(0, &PriceTable::new(vec![3, 5])).unwrap();
        assert_eq!(plan, CutPlan::empty());

        let plan = cut_rod_memo(0, &PriceTable::default()).unwrap();
        assert_eq!(plan, CutPlan::empty());
    }

    #[test]
    fn test_classic_length_8() {
        let prices = PriceTable::new(vec![1, 5, 8, 9, 10, 17, 17, 20]);
        let plan = cut_rod_memo(8, &prices).unwrap();
        assert_eq!(plan.profit, 22);
        assert_eq!(plan.pieces, vec![2, 6]);
    }

    #[test]
    fn test_demo_cases() {
        let cases = [
            (5, vec![2, 5, 7, 8, 10], 12),
            (3, vec![1, 3, 8], 8),
            (4, vec![3, 5, 6, 7], 12),
        ];
        for (length, prices, profit) in cases {
            let plan = cut_rod_memo(length, &PriceTable::new(prices)).unwrap();
            assert_eq!(plan.profit, profit);
            assert_eq!(plan.total_length(), length as usize);
        }
    }

    #[test]
    fn test_tie_prefers_smallest_first_piece() {
        // Length 2: [1,1] → 2, [2] → 2. First candidate (piece 1) wins.
        let plan = cut_rod_memo(2, &PriceTable::new(vec![1, 2])).unwrap();
        assert_eq!(plan.profit, 2);
        assert_eq!(plan.pieces, vec![1, 1]);
    }

    #[test]
    fn test_length_beyond_table() {
        // Only pieces of length 1 and 2 are priced.
        let plan = cut_rod_memo(5, &PriceTable::new(vec![1, 3])).unwrap();
        assert_eq!(plan.profit, 7);
        assert_eq!(plan.pieces, vec![1, 2, 2]);
        assert!(plan.pieces.iter().all(|&p| p <= 2));
    }

    #[test]
    fn test_all_zero_prices_still_cover_rod() {
        let plan = cut_rod_memo(3, &PriceTable::new(vec![0, 0, 0])).unwrap();
        assert_eq!(plan.profit, 0);
        assert_eq!(plan.total_length(), 3);
    }

    #[test]
    fn test_negative_length() {
        assert_eq!(
            cut_rod_memo(-4, &PriceTable::new(vec![1])),
            Err(Error::InvalidLength(-4))
        );
    }

    #[test]
    fn test_empty_table_positive_length() {
        match cut_rod_memo(2, &PriceTable::default()) {
            Err(Error::InvalidInput(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::EmptyPriceTable);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_keyed_by_value() {
        let mut cache = CutCache::new();
        let a = PriceTable::new(vec![1, 5, 8]);
        let b = PriceTable::new(vec![1, 5, 8]);
        cache.solve(3, &a).unwrap();
        cache.solve(3, &b).unwrap();
        assert_eq!(cache.table_count(), 1);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_cache_separates_tables() {
        let mut cache = CutCache::new();
        let cheap = PriceTable::new(vec![1, 2, 3]);
        let rich = PriceTable::new(vec![1, 2, 30]);
        assert_eq!(cache.solve(3, &cheap).unwrap().profit, 3);
        assert_eq!(cache.solve(3, &rich).unwrap().profit, 30);
        assert_eq!(cache.solve(3, &cheap).unwrap().profit, 3);
        assert_eq!(cache.table_count(), 2);
    }

    #[test]
    fn test_long_rod_matches_table() {
        let prices = PriceTable::new(vec![1, 5, 8, 9, 10, 17, 17, 20]);
        let memo = cut_rod_memo(100_000, &prices).unwrap();
        let table = crate::rod::cut_rod_table(100_000, &prices).unwrap();
        assert_eq!(memo.profit, table.profit);
        assert_eq!(memo.total_length(), 100_000);
    }

    #[test]
    fn test_long_rod_short_table() {
        let prices = PriceTable::new(vec![1, 5, 8]);
        let memo = cut_rod_memo(200_000, &prices).unwrap();
        let table = crate::rod::cut_rod_table(200_000, &prices).unwrap();
        assert_eq!(memo.profit, table.profit);
        assert_eq!(memo.total_length(), 200_000);
        assert!(memo.pieces.iter().all(|&p| p <= 3));
    }

    #[test]
    fn test_cache_reused_without_growth() {
        let mut cache = CutCache::new();
        let prices = PriceTable::new(vec![3, 4]);
        cache.solve(6, &prices).unwrap();
        let before = cache.len();
        assert_eq!(cache.solve(6, &prices).unwrap().profit, 18);
        assert_eq!(cache.len(), before);
        assert_eq!(cache.table_count(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = CutCache::new();
        cache.solve(4, &PriceTable::new(vec![1, 5])).unwrap();
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.table_count(), 0);
    }
}
