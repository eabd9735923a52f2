//! Comparison configuration.

use crate::strategy::{MonteCarloConfig, Strategy};

/// Which strategies to run, in what order, and with what randomness.
///
/// # Examples
///
/// ```
/// use u_knapsack::compare::ComparisonConfig;
/// use u_knapsack::strategy::Strategy;
///
/// let config = ComparisonConfig::default()
///     .with_strategies(vec![Strategy::ZeroOneByRatio, Strategy::MonteCarlo])
///     .with_trials(200)
///     .with_seed(42);
/// assert_eq!(config.strategies.len(), 2);
/// assert_eq!(config.monte_carlo.trials, 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Strategies in execution order. Duplicates are allowed.
    pub strategies: Vec<Strategy>,

    /// Parameters shared by the Monte Carlo strategies.
    pub monte_carlo: MonteCarloConfig,

    /// Base seed, offset per strategy and repeat. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            monte_carlo: MonteCarloConfig::default(),
            seed: None,
        }
    }
}

impl ComparisonConfig {
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_monte_carlo(mut self, monte_carlo: MonteCarloConfig) -> Self {
        self.monte_carlo = monte_carlo;
        self
    }

    /// Sets the Monte Carlo trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.monte_carlo.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.strategies.is_empty() {
            return Err("at least one strategy is required".into());
        }
        self.monte_carlo.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_all_strategies() {
        let config = ComparisonConfig::default();
        assert_eq!(config.strategies, Strategy::ALL.to_vec());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_strategies() {
        let config = ComparisonConfig::default().with_strategies(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_propagates_monte_carlo() {
        let config = ComparisonConfig::default()
            .with_monte_carlo(MonteCarloConfig::default().with_subset_fraction(2.0));
        assert!(config.validate().is_err());
    }
}
