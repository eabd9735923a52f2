//! Strategy execution.
//!
//! Every strategy follows the same shape: take a private copy of the
//! items, then (timed) order them and run the packing kernel. The
//! Monte Carlo strategies fold many random trials into the best one.

use super::config::MonteCarloConfig;
use super::kernel::{keep_better, pack, Packing};
use super::types::{PackingMode, Strategy};
use crate::instance::{Instance, Item};
use crate::ordering::{ByRatio, ByValue, ByWeight, ItemOrdering};
use crate::result::KnapsackResult;
use crate::timing::timed;
use rand::seq::SliceRandom;
use rand::Rng;

impl Strategy {
    /// Runs this strategy on `instance`.
    ///
    /// Randomized strategies draw every permutation from `rng`; the others
    /// leave it untouched. The call always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use u_knapsack::instance::Instance;
    /// use u_knapsack::strategy::{MonteCarloConfig, Strategy};
    ///
    /// let instance = Instance::new(50, &[(10, 60), (20, 100), (30, 120)]);
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let r = Strategy::FractionalByRatio.select(&instance, &MonteCarloConfig::default(), &mut rng);
    /// assert!((r.total_value - 240.0).abs() < 1e-9);
    /// ```
    pub fn select<R: Rng + ?Sized>(
        &self,
        instance: &Instance,
        config: &MonteCarloConfig,
        rng: &mut R,
    ) -> KnapsackResult {
        let capacity = instance.capacity();
        let items = instance.items_copy();

        let run = match self {
            Strategy::FractionalByRatio | Strategy::ZeroOneByRatio => {
                let ordering = ItemOrdering::by(ByRatio);
                timed(|| greedy(&ordering, items, capacity, self.mode()))
            }
            Strategy::FractionalByValue | Strategy::ZeroOneByValue => {
                let ordering = ItemOrdering::by(ByValue);
                timed(|| greedy(&ordering, items, capacity, self.mode()))
            }
            Strategy::FractionalByWeight | Strategy::ZeroOneByWeight => {
                let ordering = ItemOrdering::by(ByWeight);
                timed(|| greedy(&ordering, items, capacity, self.mode()))
            }
            Strategy::RandomSampling => timed(|| random_trial(items, capacity, rng)),
            Strategy::MonteCarlo => {
                timed(|| best_of_trials(&items, capacity, config.trials, rng))
            }
            Strategy::MonteCarloTopValue => {
                let ordering = ItemOrdering::by(ByValue);
                timed(|| {
                    let mut pool = ordering.sort(items);
                    pool.truncate(config.subset_size(pool.len()));
                    best_of_trials(&pool, capacity, config.trials, rng)
                })
            }
        };

        log::debug!(
            "{}: value={} weight={} items={} in {:?}",
            self.name(),
            run.value.value,
            run.value.weight,
            run.value.items.len(),
            run.elapsed
        );

        KnapsackResult {
            strategy: *self,
            total_value: run.value.value,
            total_weight: run.value.weight,
            elapsed: run.elapsed,
            selected_items: run.value.items,
        }
    }
}

fn greedy(ordering: &ItemOrdering, items: Vec<Item>, capacity: u64, mode: PackingMode) -> Packing {
    let ordered = ordering.sort(items);
    pack(&ordered, capacity, mode)
}

/// One uniform random permutation packed 0-1.
fn random_trial<R: Rng + ?Sized>(mut items: Vec<Item>, capacity: u64, rng: &mut R) -> Packing {
    items.shuffle(rng);
    pack(&items, capacity, PackingMode::ZeroOne)
}

/// Folds `trials` random 0-1 packings of `pool` into the best one.
///
/// Each trial shuffles a fresh copy of `pool` in its original order, so
/// trial `k` sees the same permutation whatever the total trial count.
/// The fold starts from the empty packing and [`keep_better`] only
/// replaces on strictly greater value, so the first best trial wins.
fn best_of_trials<R: Rng + ?Sized>(
    pool: &[Item],
    capacity: u64,
    trials: usize,
    rng: &mut R,
) -> Packing {
    let mut perm = pool.to_vec();
    (0..trials)
        .map(|_| {
            perm.copy_from_slice(pool);
            perm.shuffle(rng);
            pack(&perm, capacity, PackingMode::ZeroOne)
        })
        .fold(Packing::default(), keep_better)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn classic() -> Instance {
        Instance::new(50, &[(10, 60), (20, 100), (30, 120)])
    }

    fn run(strategy: Strategy, instance: &Instance, seed: u64) -> KnapsackResult {
        let mut rng = StdRng::seed_from_u64(seed);
        strategy.select(instance, &MonteCarloConfig::default(), &mut rng)
    }

    fn value_of(instance: &Instance, ids: &[usize]) -> f64 {
        ids.iter()
            .filter_map(|&id| instance.item(id))
            .map(|i| i.value() as f64)
            .sum()
    }

    #[test]
    fn test_fractional_ratio_classic() {
        let r = run(Strategy::FractionalByRatio, &classic(), 0);
        assert!((r.total_value - 240.0).abs() < 1e-9);
        assert_eq!(r.total_weight, 50.0);
        assert_eq!(r.selected_items, vec![1, 2, 3]);
        assert_eq!(r.strategy, Strategy::FractionalByRatio);
    }

    #[test]
    fn test_zero_one_ratio_classic() {
        let r = run(Strategy::ZeroOneByRatio, &classic(), 0);
        assert_eq!(r.total_value, 160.0);
        assert_eq!(r.total_weight, 30.0);
        assert_eq!(r.selected_items, vec![1, 2]);
    }

    #[test]
    fn test_value_greedy_classic() {
        let frac = run(Strategy::FractionalByValue, &classic(), 0);
        // 120 (w30) + 100 (w20) fills exactly
        assert_eq!(frac.selected_items, vec![3, 2]);
        assert_eq!(frac.total_value, 220.0);

        let zero_one = run(Strategy::ZeroOneByValue, &classic(), 0);
        assert_eq!(zero_one.selected_items, vec![3, 2]);
        assert_eq!(zero_one.total_value, 220.0);
    }

    #[test]
    fn test_weight_greedy_classic() {
        let frac = run(Strategy::FractionalByWeight, &classic(), 0);
        assert_eq!(frac.selected_items, vec![1, 2, 3]);
        assert!((frac.total_value - 240.0).abs() < 1e-9);

        let zero_one = run(Strategy::ZeroOneByWeight, &classic(), 0);
        assert_eq!(zero_one.selected_items, vec![1, 2]);
        assert_eq!(zero_one.total_value, 160.0);
    }

    #[test]
    fn test_weight_greedy_differs_from_ratio() {
        let instance = Instance::new(10, &[(1, 1), (9, 90), (2, 2)]);
        let by_weight = run(Strategy::ZeroOneByWeight, &instance, 0);
        let by_ratio = run(Strategy::ZeroOneByRatio, &instance, 0);

        assert_eq!(by_weight.selected_items, vec![1, 3]);
        assert_eq!(by_ratio.selected_items, vec![2, 1]);
        assert!(by_ratio.total_value > by_weight.total_value);
    }

    #[test]
    fn test_monte_carlo_finds_optimum_on_small_instance() {
        let r = run(Strategy::MonteCarlo, &classic(), 42);
        // {2, 3} = 220 is the 0-1 optimum; 1000 trials over 6 permutations
        assert_eq!(r.total_value, 220.0);
        assert_eq!(r.total_weight, 50.0);
    }

    #[test]
    fn test_monte_carlo_top_value_restricts_pool() {
        // n = 3 -> top 2 by value: items 3 (120) and 2 (100)
        let r = run(Strategy::MonteCarloTopValue, &classic(), 42);
        assert!(r.selected_items.iter().all(|&id| id == 2 || id == 3));
        assert_eq!(r.total_value, 220.0);
    }

    #[test]
    fn test_monte_carlo_top_value_single_item_pool() {
        // n = 1 -> subset of 1
        let instance = Instance::new(10, &[(5, 7)]);
        let r = run(Strategy::MonteCarloTopValue, &instance, 1);
        assert_eq!(r.selected_items, vec![1]);
    }

    #[test]
    fn test_zero_trials_is_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = MonteCarloConfig::default().with_trials(0);
        for s in [Strategy::MonteCarlo, Strategy::MonteCarloTopValue] {
            let r = s.select(&classic(), &config, &mut rng);
            assert!(r.selected_items.is_empty());
            assert_eq!(r.total_value, 0.0);
        }
    }

    #[test]
    fn test_all_zero_value_trials_keep_empty_selection() {
        let instance = Instance::new(10, &[(2, 0), (3, 0)]);
        let r = run(Strategy::MonteCarlo, &instance, 9);
        assert!(r.selected_items.is_empty());
        assert_eq!(r.total_weight, 0.0);
    }

    #[test]
    fn test_random_sampling_is_consistent() {
        let instance = Instance::new(15, &[(4, 3), (7, 9), (5, 5), (6, 1), (3, 8)]);
        let r = run(Strategy::RandomSampling, &instance, 11);

        assert!(r.total_weight <= 15.0);
        assert_eq!(r.total_value, value_of(&instance, &r.selected_items));
    }

    #[test]
    fn test_same_seed_same_result() {
        let instance = Instance::new(20, &[(4, 3), (7, 9), (5, 5), (6, 1), (3, 8), (9, 4)]);
        for s in Strategy::ALL.into_iter().filter(Strategy::is_randomized) {
            let a = run(s, &instance, 1234);
            let b = run(s, &instance, 1234);
            assert!(a.same_outcome(&b), "{s} not reproducible");
        }
    }

    #[test]
    fn test_deterministic_strategies_ignore_rng() {
        let instance = Instance::new(20, &[(4, 3), (7, 9), (5, 5), (6, 1), (3, 8), (9, 4)]);
        for s in Strategy::ALL.into_iter().filter(|s| !s.is_randomized()) {
            let a = run(s, &instance, 1);
            let b = run(s, &instance, 2);
            assert!(a.same_outcome(&b), "{s} depends on the rng");
        }
    }

    #[test]
    fn test_degenerate_instances() {
        let empty = Instance::new(100, &[]);
        let zero_cap = Instance::new(0, &[(1, 5), (0, 3), (2, 2)]);
        for instance in [&empty, &zero_cap] {
            for s in Strategy::ALL {
                let r = run(s, instance, 5);
                assert_eq!(r.total_value, 0.0, "{s}");
                assert_eq!(r.total_weight, 0.0, "{s}");
                assert!(r.selected_items.is_empty(), "{s}");
            }
        }
    }

    #[test]
    fn test_oversized_single_item() {
        let instance = Instance::new(5, &[(20, 100)]);
        for s in Strategy::ALL {
            let r = run(s, &instance, 5);
            match s.mode() {
                PackingMode::ZeroOne => assert!(r.selected_items.is_empty(), "{s}"),
                PackingMode::Fractional => {
                    assert_eq!(r.selected_items, vec![1]);
                    assert!((r.total_value - 25.0).abs() < 1e-9);
                    assert_eq!(r.total_weight, 5.0);
                }
            }
        }
    }

    #[test]
    fn test_instance_not_mutated() {
        let instance = classic();
        let before = instance.clone();
        for s in Strategy::ALL {
            run(s, &instance, 8);
        }
        assert_eq!(instance, before);
    }
}
