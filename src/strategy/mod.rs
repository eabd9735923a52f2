//! Selection strategies.
//!
//! Nine strategies in three families, all built on one greedy packing
//! kernel ([`pack`]) and differing only in the order items are visited:
//!
//! | Family | Order | Modes |
//! |---|---|---|
//! | Ratio-greedy | value/weight, descending | fractional, 0-1 |
//! | Value-greedy | value, descending | fractional, 0-1 |
//! | Weight-greedy | weight, ascending | fractional, 0-1 |
//! | Random sampling | one uniform permutation | 0-1 |
//! | Monte Carlo | best of `trials` permutations | 0-1 |
//! | Monte Carlo (top value) | as above, top-value subset only | 0-1 |
//!
//! Fractional ratio-greedy is optimal for the fractional relaxation and
//! serves as the reference value. Everything else is a heuristic; none of
//! the 0-1 strategies guarantee optimality.
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer
//!   Implementations*, ch. 2

mod config;
mod kernel;
mod runner;
mod types;

pub use config::MonteCarloConfig;
pub use kernel::{keep_better, pack, Packing};
pub use types::{PackingMode, Strategy, UnknownStrategy};
