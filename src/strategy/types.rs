//! Strategy identifiers and packing modes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the packing kernel treats an item that does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackingMode {
    /// Take the fitting fraction of the first item that does not fit,
    /// then stop.
    Fractional,

    /// Skip any item that does not fit and keep scanning.
    ZeroOne,
}

/// The nine selection strategies.
///
/// Variants are listed in the order of [`Strategy::ALL`], which is also
/// the default comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Ratio-greedy, fractional. Optimal for the fractional relaxation.
    FractionalByRatio,
    FractionalByValue,
    FractionalByWeight,
    ZeroOneByRatio,
    ZeroOneByValue,
    ZeroOneByWeight,
    /// One uniform random permutation, packed 0-1.
    RandomSampling,
    /// Best of `trials` random permutations of all items.
    MonteCarlo,
    /// Best of `trials` random permutations of the top-value subset.
    MonteCarloTopValue,
}

impl Strategy {
    /// All strategies in comparison order.
    pub const ALL: [Strategy; 9] = [
        Strategy::FractionalByRatio,
        Strategy::FractionalByValue,
        Strategy::FractionalByWeight,
        Strategy::ZeroOneByRatio,
        Strategy::ZeroOneByValue,
        Strategy::ZeroOneByWeight,
        Strategy::RandomSampling,
        Strategy::MonteCarlo,
        Strategy::MonteCarloTopValue,
    ];

    /// Human-readable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FractionalByRatio => "Fractional - Greedy by Ratio",
            Strategy::FractionalByValue => "Fractional - Greedy by Value",
            Strategy::FractionalByWeight => "Fractional - Greedy by Lowest Weight",
            Strategy::ZeroOneByRatio => "0-1 Knapsack - Greedy by Ratio",
            Strategy::ZeroOneByValue => "0-1 Knapsack - Greedy by Value",
            Strategy::ZeroOneByWeight => "0-1 Knapsack - Greedy by Lowest Weight",
            Strategy::RandomSampling => "0-1 Knapsack - Random Sampling",
            Strategy::MonteCarlo => "0-1 Knapsack - Monte Carlo (All Items)",
            Strategy::MonteCarloTopValue => "0-1 Knapsack - Monte Carlo (Top Value)",
        }
    }

    /// Short key accepted by [`FromStr`].
    pub fn key(&self) -> &'static str {
        match self {
            Strategy::FractionalByRatio => "frac-ratio",
            Strategy::FractionalByValue => "frac-value",
            Strategy::FractionalByWeight => "frac-weight",
            Strategy::ZeroOneByRatio => "01-ratio",
            Strategy::ZeroOneByValue => "01-value",
            Strategy::ZeroOneByWeight => "01-weight",
            Strategy::RandomSampling => "random",
            Strategy::MonteCarlo => "mc",
            Strategy::MonteCarloTopValue => "mc-top",
        }
    }

    pub fn mode(&self) -> PackingMode {
        match self {
            Strategy::FractionalByRatio
            | Strategy::FractionalByValue
            | Strategy::FractionalByWeight => PackingMode::Fractional,
            _ => PackingMode::ZeroOne,
        }
    }

    /// Whether the strategy draws from the random source.
    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            Strategy::RandomSampling | Strategy::MonteCarlo | Strategy::MonteCarloTopValue
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a strategy key is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected one of: frac-ratio, frac-value, frac-weight, 01-ratio, 01-value, 01-weight, random, mc, mc-top)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|st| st.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
