//! Monte Carlo parameters.

/// Parameters for the Monte Carlo strategies.
///
/// Deterministic strategies ignore this configuration.
///
/// # Examples
///
/// ```
/// use u_knapsack::strategy::MonteCarloConfig;
///
/// let config = MonteCarloConfig::default()
///     .with_trials(5000)
///     .with_subset_fraction(0.5);
/// assert_eq!(config.trials, 5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of independent random-permutation trials.
    ///
    /// Zero trials yields an empty selection.
    pub trials: usize,

    /// Fraction of items (ranked by value) kept by the top-value variant.
    ///
    /// The subset holds `max(1, floor(subset_fraction * n))` items.
    pub subset_fraction: f64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            subset_fraction: 0.7,
        }
    }
}

impl MonteCarloConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_subset_fraction(mut self, fraction: f64) -> Self {
        self.subset_fraction = fraction;
        self
    }

    /// Number of items the top-value variant keeps out of `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::strategy::MonteCarloConfig;
    ///
    /// let config = MonteCarloConfig::default();
    /// assert_eq!(config.subset_size(10), 7);
    /// assert_eq!(config.subset_size(2), 1);
    /// assert_eq!(config.subset_size(1), 1);
    /// assert_eq!(config.subset_size(0), 0);
    /// ```
    pub fn subset_size(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // NaN and negatives saturate to 0 and are lifted to 1
        let k = (n as f64 * self.subset_fraction).floor() as usize;
        k.clamp(1, n)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.subset_fraction > 0.0 && self.subset_fraction <= 1.0) {
            return Err(format!(
                "subset_fraction must be in (0, 1], got {}",
                self.subset_fraction
            ));
        }
        Ok(())
    }
}
