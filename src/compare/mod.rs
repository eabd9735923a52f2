//! Strategy comparison harness.
//!
//! [`Comparator`] runs a caller-chosen list of strategies over a single
//! instance, in order, and collects their results into a [`Comparison`].
//! Results stay in execution order; [`Comparison::ranked`] gives a
//! best-first view for presentation.

mod config;
mod runner;

pub use config::ComparisonConfig;
pub use runner::{fractional_optimum, Comparator, Comparison};
