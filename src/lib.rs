//! Greedy and randomized heuristics for the knapsack problem.
//!
//! Runs a battery of selection strategies for the fractional and 0-1
//! knapsack problems over one shared instance and compares what each
//! achieves (value, weight, execution time):
//!
//! - **Greedy**: by value/weight ratio, by value, or by lowest weight,
//!   each in fractional and 0-1 mode.
//! - **Randomized**: one random permutation, or the best of many
//!   Monte Carlo trials over all items or over the top-value subset.
//!
//! Fractional ratio-greedy is optimal for the fractional relaxation and
//! is used as the reference value. The 0-1 strategies are approximations
//! only; exact methods (dynamic programming, branch and bound) are out of
//! scope.
//!
//! # Architecture
//!
//! [`instance`] → [`strategy`] (ordered by [`ordering`], timed by
//! [`timing`]) → [`result`]; many results → [`compare`] → [`report`].
//!
//! Randomness is always passed in by the caller, so seeded runs are
//! reproducible.

pub mod compare;
pub mod instance;
pub mod ordering;
pub mod report;
pub mod result;
pub mod strategy;
pub mod timing;
