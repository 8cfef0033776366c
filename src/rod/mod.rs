//! Rod cutting: maximum-profit decomposition of a rod into priced pieces.
//!
//! Two solvers share one recurrence:
//!
//! ```text
//! best(0) = 0
//! best(n) = max over i in 1..=min(n, P) of price(i) + best(n - i)
//! ```
//!
//! where `P` is the number of priced piece lengths. Ties go to the
//! smallest first piece.
//!
//! - [`CutCache`] / [`cut_rod_memo`]: top-down recursion with an explicit
//!   memo keyed on `(price table, length)`.
//! - [`cut_rod_table`]: bottom-up tabulation, no recursion.
//!
//! Both return the same profit for the same input.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Rod cutting)

mod memo;
mod table;

pub use memo::{cut_rod_memo, CutCache};
pub use table::cut_rod_table;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CutPlan, PriceTable};

/// Which rod cutting solver to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutMethod {
    /// Top-down memoized recursion.
    Memoized,
    /// Bottom-up tabulation.
    #[default]
    Tabulated,
}

/// Solves a rod cutting instance with the chosen method.
///
/// # Example
///
/// ```
/// use u_batch::models::PriceTable;
/// use u_batch::rod::{cut_rod, CutMethod};
///
/// let prices = PriceTable::new(vec![1, 5, 8, 9, 10, 17, 17, 20]);
/// let plan = cut_rod(8, &prices, CutMethod::Memoized).unwrap();
/// assert_eq!(plan.profit, 22);
/// assert_eq!(plan.total_length(), 8);
/// ```
pub fn cut_rod(length: i64, prices: &PriceTable, method: CutMethod) -> Result<CutPlan> {
    match method {
        CutMethod::Memoized => cut_rod_memo(length, prices),
        CutMethod::Tabulated => cut_rod_table(length, prices),
    }
}

/// Converts a signed length, rejecting negatives.
fn checked_length(length: i64) -> Result<usize> {
    usize::try_from(length).map_err(|_| crate::Error::InvalidLength(length))
}
