//! Sequential strategy comparison.

use super::config::ComparisonConfig;
use crate::instance::Instance;
use crate::ordering::{ByRatio, ItemOrdering};
use crate::result::KnapsackResult;
use crate::strategy::{pack, PackingMode, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Results of one comparison run.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// One result per configured strategy, in execution order.
    pub results: Vec<KnapsackResult>,

    /// Fractional-relaxation optimum of the instance.
    ///
    /// Used as the reference for optimality ratios. It bounds every
    /// strategy's value whenever all item weights are positive.
    pub reference_value: f64,
}

impl Comparison {
    /// Results ordered by value, best first. Ties keep execution order.
    pub fn ranked(&self) -> Vec<&KnapsackResult> {
        let mut ranked: Vec<&KnapsackResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
        ranked
    }

    /// The highest-value result; the earliest one on ties.
    pub fn best(&self) -> Option<&KnapsackResult> {
        self.ranked().into_iter().next()
    }

    /// Optimality ratio of each result against [`reference_value`](Self::reference_value).
    pub fn optimality_ratios(&self) -> Vec<f64> {
        self.results
            .iter()
            .map(|r| r.optimality_ratio(self.reference_value))
            .collect()
    }
}

/// Runs a configured set of strategies over one instance.
///
/// Strategies run one after another on the calling thread, since their
/// timings are part of the output.
///
/// # Examples
///
/// ```
/// use u_knapsack::compare::{Comparator, ComparisonConfig};
/// use u_knapsack::instance::Instance;
///
/// let instance = Instance::new(50, &[(10, 60), (20, 100), (30, 120)]);
/// let comparator = Comparator::new(ComparisonConfig::default().with_seed(1)).unwrap();
///
/// let comparison = comparator.run(&instance);
/// assert_eq!(comparison.results.len(), 9);
/// assert!((comparison.reference_value - 240.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Comparator {
    config: ComparisonConfig,
}

impl Comparator {
    /// Creates a comparator after validating `config`.
    pub fn new(config: ComparisonConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Runs every configured strategy in order.
    ///
    /// Each strategy gets its own random source. With a base seed, that
    /// source depends only on the strategy and how many times it already
    /// appeared in the list, so adding or removing one strategy does not
    /// change the randomness seen by the others.
    pub fn run(&self, instance: &Instance) -> Comparison {
        log::debug!(
            "comparing {} strategies on {} items (capacity {})",
            self.config.strategies.len(),
            instance.len(),
            instance.capacity()
        );

        let mut seen: HashMap<Strategy, u64> = HashMap::new();
        let results = self
            .config
            .strategies
            .iter()
            .map(|strategy| {
                let occurrence = seen.entry(*strategy).or_insert(0);
                let stream = stream_index(*strategy, *occurrence);
                *occurrence += 1;

                let mut rng = match self.config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
                    None => StdRng::seed_from_u64(rand::random()),
                };
                strategy.select(instance, &self.config.monte_carlo, &mut rng)
            })
            .collect();

        Comparison {
            results,
            reference_value: fractional_optimum(instance),
        }
    }
}

/// Seed offset for the `occurrence`-th run of `strategy` in one comparison.
fn stream_index(strategy: Strategy, occurrence: u64) -> u64 {
    let ordinal = Strategy::ALL
        .iter()
        .position(|s| *s == strategy)
        .unwrap_or(0) as u64;
    occurrence
        .wrapping_mul(Strategy::ALL.len() as u64)
        .wrapping_add(ordinal)
}

/// Value of the fractional relaxation, computed without timing.
pub fn fractional_optimum(instance: &Instance) -> f64 {
    let ordered = ItemOrdering::by(ByRatio).sort(instance.items_copy());
    pack(&ordered, instance.capacity(), PackingMode::Fractional).value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Instance {
        Instance::new(50, &[(10, 60), (20, 100), (30, 120)])
    }

    fn seeded(strategies: Vec<Strategy>) -> Comparator {
        Comparator::new(
            ComparisonConfig::default()
                .with_strategies(strategies)
                .with_trials(100)
                .with_seed(7),
        )
        .unwrap()
    }

    #[test]
    fn test_execution_order_preserved() {
        let order = vec![
            Strategy::MonteCarlo,
            Strategy::FractionalByWeight,
            Strategy::ZeroOneByValue,
        ];
        let comparison = seeded(order.clone()).run(&classic());
        let got: Vec<Strategy> = comparison.results.iter().map(|r| r.strategy).collect();
        assert_eq!(got, order);
    }

    #[test]
    fn test_reference_value() {
        let comparison = seeded(vec![Strategy::ZeroOneByRatio]).run(&classic());
        assert!((comparison.reference_value - 240.0).abs() < 1e-9);
        assert!((comparison.optimality_ratios()[0] - 160.0 / 240.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranked_best_first_stable() {
        let comparison = seeded(vec![
            Strategy::ZeroOneByRatio,
            Strategy::ZeroOneByWeight,
            Strategy::FractionalByRatio,
            Strategy::ZeroOneByValue,
        ])
        .run(&classic());

        let ranked: Vec<Strategy> = comparison.ranked().iter().map(|r| r.strategy).collect();
        assert_eq!(
            ranked,
            vec![
                Strategy::FractionalByRatio,
                Strategy::ZeroOneByValue,
                Strategy::ZeroOneByRatio,
                Strategy::ZeroOneByWeight,
            ]
        );
        assert_eq!(
            comparison.best().map(|r| r.strategy),
            Some(Strategy::FractionalByRatio)
        );
    }

    #[test]
    fn test_seeded_comparison_reproducible() {
        let instance = Instance::new(25, &[(4, 3), (7, 9), (5, 5), (6, 1), (3, 8), (9, 4)]);
        let comparator = Comparator::new(ComparisonConfig::default().with_seed(99)).unwrap();
        let a = comparator.run(&instance);
        let b = comparator.run(&instance);
        for (x, y) in a.results.iter().zip(&b.results) {
            assert!(x.same_outcome(y), "{}", x.strategy);
        }
    }

    #[test]
    fn test_seeding_is_independent_of_neighbors() {
        let instance = Instance::new(25, &[(4, 3), (7, 9), (5, 5), (6, 1), (3, 8), (9, 4)]);
        let alone = seeded(vec![Strategy::RandomSampling]).run(&instance);
        let after_other =
            seeded(vec![Strategy::ZeroOneByRatio, Strategy::RandomSampling]).run(&instance);
        let before_other =
            seeded(vec![Strategy::RandomSampling, Strategy::MonteCarlo]).run(&instance);

        assert!(alone.results[0].same_outcome(&after_other.results[1]));
        assert!(alone.results[0].same_outcome(&before_other.results[0]));
    }

    #[test]
    fn test_repeated_strategy_gets_distinct_streams() {
        assert_ne!(
            stream_index(Strategy::MonteCarlo, 0),
            stream_index(Strategy::MonteCarlo, 1)
        );
        let streams: std::collections::HashSet<u64> = Strategy::ALL
            .iter()
            .flat_map(|&s| (0..3).map(move |k| stream_index(s, k)))
            .collect();
        assert_eq!(streams.len(), Strategy::ALL.len() * 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Comparator::new(ComparisonConfig::default().with_strategies(vec![]));
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_instance() {
        let comparison = Comparator::new(ComparisonConfig::default())
            .unwrap()
            .run(&Instance::new(10, &[]));
        assert_eq!(comparison.reference_value, 0.0);
        assert!(comparison.results.iter().all(|r| r.total_value == 0.0));
        assert!(comparison.optimality_ratios().iter().all(|&p| p == 0.0));
    }
}
