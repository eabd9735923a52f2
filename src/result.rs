//! Uniform result record produced by every strategy.

use crate::strategy::Strategy;
use crate::timing::as_millis_f64;
use std::time::Duration;

/// Outcome of one strategy invocation.
///
/// `selected_items` holds item ids in the order they were packed. For
/// fractional strategies the last id may refer to a partially taken item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,

    /// Accumulated value. Integral for 0-1 strategies.
    pub total_value: f64,

    /// Accumulated weight. Never exceeds the instance capacity.
    pub total_weight: f64,

    /// Time spent in ordering and packing.
    pub elapsed: Duration,

    /// Selected item ids in selection order.
    pub selected_items: Vec<usize>,
}

impl KnapsackResult {
    /// Display name of the producing strategy.
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    /// This result's value as a percentage of `optimal`.
    ///
    /// Returns `0.0` when `optimal` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_knapsack::result::KnapsackResult;
    /// use u_knapsack::strategy::Strategy;
    ///
    /// let r = KnapsackResult {
    ///     strategy: Strategy::ZeroOneByRatio,
    ///     total_value: 160.0,
    ///     total_weight: 30.0,
    ///     elapsed: Duration::ZERO,
    ///     selected_items: vec![1, 2],
    /// };
    /// assert!((r.optimality_ratio(240.0) - 66.666).abs() < 1e-2);
    /// assert_eq!(r.optimality_ratio(0.0), 0.0);
    /// ```
    pub fn optimality_ratio(&self, optimal: f64) -> f64 {
        if optimal > 0.0 {
            self.total_value / optimal * 100.0
        } else {
            0.0
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }

    /// Compares everything except the elapsed time.
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.strategy == other.strategy
            && self.total_value.to_bits() == other.total_value.to_bits()
            && self.total_weight.to_bits() == other.total_weight.to_bits()
            && self.selected_items == other.selected_items
    }
}
