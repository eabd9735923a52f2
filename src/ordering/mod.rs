//! Item ordering policies.
//!
//! Greedy strategies differ only in the order they visit items. Orders are
//! expressed as [`OrderKey`]s kept outside the [`Item`](crate::instance::Item)
//! type and applied by [`ItemOrdering`], a stable multi-key sort:
//!
//! - [`ByRatio`]: value/weight, descending
//! - [`ByValue`]: value, descending
//! - [`ByWeight`]: weight, ascending
//!
//! Ties always fall back to input order.
//!
//! # References
//!
//! Dantzig (1957), "Discrete-Variable Extremum Problems" (ratio ordering
//! for the fractional relaxation)

mod engine;
mod types;

pub use engine::ItemOrdering;
pub use types::{ByRatio, ByValue, ByWeight, OrderKey};
