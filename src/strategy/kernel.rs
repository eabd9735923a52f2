//! Greedy packing kernel shared by every strategy.

use super::types::PackingMode;
use crate::instance::Item;

/// Accumulated state of one packing pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packing {
    pub value: f64,
    pub weight: f64,
    /// Item ids in the order they were taken.
    pub items: Vec<usize>,
}

impl Packing {
    fn take_whole(&mut self, item: &Item) {
        self.value += item.value() as f64;
        self.weight += item.weight() as f64;
        self.items.push(item.id());
    }
}

/// Packs `items` in the given order into a knapsack of `capacity`.
///
/// In [`PackingMode::Fractional`] the scan stops once capacity reaches
/// zero; the first item that does not fit is split and nothing is
/// packed after it. In [`PackingMode::ZeroOne`] items that do not fit are
/// skipped and the scan continues. A capacity of zero always yields an
/// empty packing.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::Instance;
/// use u_knapsack::strategy::{pack, PackingMode};
///
/// let instance = Instance::new(50, &[(10, 60), (20, 100), (30, 120)]);
///
/// let frac = pack(instance.items(), 50, PackingMode::Fractional);
/// assert!((frac.value - 240.0).abs() < 1e-9);
///
/// let zero_one = pack(instance.items(), 50, PackingMode::ZeroOne);
/// assert_eq!(zero_one.items, vec![1, 2]);
/// ```
pub fn pack<'a, I>(items: I, capacity: u64, mode: PackingMode) -> Packing
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut packing = Packing::default();
    // A zero-capacity knapsack is degenerate: nothing is selected, not
    // even weightless items.
    if capacity == 0 {
        return packing;
    }
    let mut remaining = capacity;

    for item in items {
        match mode {
            PackingMode::Fractional => {
                if remaining == 0 {
                    break;
                }
                if item.weight() <= remaining {
                    packing.take_whole(item);
                    remaining -= item.weight();
                } else {
                    // weight > remaining > 0 here
                    packing.value +=
                        item.value() as f64 * remaining as f64 / item.weight() as f64;
                    packing.weight += remaining as f64;
                    packing.items.push(item.id());
                    break;
                }
            }
            PackingMode::ZeroOne => {
                if item.weight() <= remaining {
                    packing.take_whole(item);
                    remaining -= item.weight();
                }
            }
        }
    }

    packing
}

/// Keeps `candidate` only if it is strictly more valuable than `best`.
///
/// Used as the fold step over Monte Carlo trials: on equal value the
/// earlier packing wins.
pub fn keep_better(best: Packing, candidate: Packing) -> Packing {
    if candidate.value > best.value {
        candidate
    } else {
        best
    }
}
