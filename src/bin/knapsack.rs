//! Command-line front end: load an instance, run strategies, print results.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use u_knapsack::compare::{Comparator, ComparisonConfig};
use u_knapsack::instance::load_instance;
use u_knapsack::report::{render_result, render_summary};
use u_knapsack::strategy::{MonteCarloConfig, Strategy};

/// Compare greedy and randomized knapsack heuristics on one instance.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instance file: `n capacity` followed by n `weight value` lines
    instance: PathBuf,

    /// Strategy to run (repeatable). Runs all nine when omitted.
    /// One of: frac-ratio, frac-value, frac-weight, 01-ratio, 01-value,
    /// 01-weight, random, mc, mc-top
    #[arg(short, long = "strategy")]
    strategies: Vec<Strategy>,

    /// Monte Carlo trial count
    #[arg(short, long, default_value_t = 1000)]
    trials: usize,

    /// Fraction of items (by value) kept by the top-value Monte Carlo variant
    #[arg(long, default_value_t = 0.7)]
    subset_fraction: f64,

    /// Base random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print selected item ids for each strategy
    #[arg(short, long)]
    detailed: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let instance = load_instance(&args.instance)
        .with_context(|| format!("failed to load {}", args.instance.display()))?;

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies
    };

    let mut config = ComparisonConfig::default()
        .with_strategies(strategies)
        .with_monte_carlo(
            MonteCarloConfig::default()
                .with_trials(args.trials)
                .with_subset_fraction(args.subset_fraction),
        );
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let comparator = Comparator::new(config).map_err(|e| anyhow!("invalid options: {e}"))?;
    log::info!(
        "running {} strategies on {}",
        comparator.config().strategies.len(),
        args.instance.display()
    );

    let comparison = comparator.run(&instance);

    println!(
        "Dataset: {} ({} items, capacity {})",
        args.instance.display(),
        instance.len(),
        instance.capacity()
    );
    for result in &comparison.results {
        println!();
        print!("{}", render_result(result, args.detailed));
    }
    if comparison.results.len() > 1 {
        println!();
        print!("{}", render_summary(&comparison));
    }

    Ok(())
}
