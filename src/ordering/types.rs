//! Sort keys for item ordering.

use crate::instance::Item;

/// A scoring key that places items in packing order.
///
/// Keys return `f64` scores where **lower comes first**. Descending
/// orders negate their quantity.
///
/// Keys live outside [`Item`], so a new ordering only needs a new key.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::Item;
/// use u_knapsack::ordering::OrderKey;
///
/// // Heaviest first
/// struct Heaviest;
///
/// impl OrderKey for Heaviest {
///     fn name(&self) -> &str { "Heaviest" }
///     fn score(&self, item: &Item) -> f64 { -(item.weight() as f64) }
/// }
///
/// assert!(Heaviest.score(&Item::new(1, 9, 0)) < Heaviest.score(&Item::new(2, 1, 0)));
/// ```
pub trait OrderKey: Send + Sync {
    /// Returns the name of this key.
    fn name(&self) -> &str;

    /// Computes the sort score for an item. Lower scores are packed first.
    fn score(&self, item: &Item) -> f64;
}

/// Highest value-to-weight ratio first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByRatio;

impl OrderKey for ByRatio {
    fn name(&self) -> &str {
        "ByRatio"
    }

    fn score(&self, item: &Item) -> f64 {
        -item.ratio()
    }
}

/// Highest absolute value first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl OrderKey for ByValue {
    fn name(&self) -> &str {
        "ByValue"
    }

    fn score(&self, item: &Item) -> f64 {
        -(item.value() as f64)
    }
}

/// Lowest weight first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByWeight;

impl OrderKey for ByWeight {
    fn name(&self) -> &str {
        "ByWeight"
    }

    fn score(&self, item: &Item) -> f64 {
        item.weight() as f64
    }
}
