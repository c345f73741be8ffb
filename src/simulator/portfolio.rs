//! Multi-year investment portfolio accumulation simulation.
//!
//! Each trajectory grows a stock sleeve and a bond sleeve by
//! independently drawn annual returns, then adds the annual contribution
//! either to each sleeve in target proportion (no rebalancing) or by
//! resetting both sleeves to the target allocations (rebalancing).
//! Terminal accumulations stream into a [`RunningStat`] and are reported
//! with exceedance probabilities and a confidence interval.

use super::config::PortfolioConfig;
use super::report::{PortfolioReport, PortfolioScenario};
use crate::stats::{confidence_interval, NormalSampler, RunningStat, StatsError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the four standard scenarios back to back: normal parameters,
/// fixed return, rebalanced, and rebalanced fixed return.
pub fn run_portfolio_suite(base: &PortfolioConfig) -> Result<PortfolioReport, StatsError> {
    let variants: [(&str, bool, bool); 4] = [
        ("no rebalance, normal parameters", false, false),
        ("no rebalance, standard deviation = 0", true, false),
        ("portfolio rebalanced", false, true),
        ("portfolio rebalanced, standard deviation = 0", true, true),
    ];

    let mut scenarios = Vec::with_capacity(variants.len());
    for (idx, (label, fixed, rebalance)) in variants.iter().enumerate() {
        let mut config = base.clone();
        config.rebalance = *rebalance;
        if *fixed {
            config.stock_return = config.stock_return.fixed();
            config.bond_return = config.bond_return.fixed();
        }
        // Independent stream per scenario, derived from the base seed.
        config.seed = base.seed.map(|s| s.wrapping_add(idx as u64));

        if base.verbosity >= 2 {
            println!("Scenario {}/{}: {}", idx + 1, variants.len(), label);
        }
        scenarios.push(run_portfolio_scenario(label, &config)?);
    }

    Ok(PortfolioReport { scenarios })
}

/// Run a single scenario and summarize its terminal accumulations.
pub fn run_portfolio_scenario(
    label: &str,
    config: &PortfolioConfig,
) -> Result<PortfolioScenario, StatsError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let stock = NormalSampler::new(config.stock_return.mean, config.stock_return.stdev);
    let bond = NormalSampler::new(config.bond_return.mean, config.bond_return.stdev);

    let mut accumulation = RunningStat::new();
    let mut exceedances = vec![0u32; config.thresholds.len()];

    for _ in 0..config.iterations {
        let terminal = simulate_trajectory(config, &stock, &bond, &mut rng);
        accumulation.push(terminal);
        for (count, &level) in exceedances.iter_mut().zip(&config.thresholds) {
            if terminal > level {
                *count += 1;
            }
        }
    }

    let mean = accumulation.mean()?;
    let stdev = accumulation.stdev()?;
    let interval = confidence_interval(mean, stdev, accumulation.count(), config.confidence_level)?;

    let threshold_probabilities = config
        .thresholds
        .iter()
        .zip(&exceedances)
        .map(|(&level, &count)| (level, count as f64 / config.iterations as f64))
        .collect();

    Ok(PortfolioScenario {
        label: label.to_string(),
        stock_return: config.stock_return,
        bond_return: config.bond_return,
        rebalance: config.rebalance,
        iterations: config.iterations,
        confidence_level: config.confidence_level,
        mean_accumulation: mean,
        stdev_accumulation: stdev,
        threshold_probabilities,
        interval,
    })
}

/// Accumulate one trajectory and return its terminal value.
///
/// The recorded accumulation is the portfolio value after the final
/// year's growth; each year's contribution lands in the sleeves ahead of
/// the following year's returns.
fn simulate_trajectory(
    config: &PortfolioConfig,
    stock: &NormalSampler,
    bond: &NormalSampler,
    rng: &mut ChaCha8Rng,
) -> f64 {
    let mut stock_amt = config.initial_capital * config.stock_allocation;
    let mut bond_amt = config.initial_capital * config.bond_allocation;
    let mut total = config.initial_capital;

    for _ in 0..config.years {
        stock_amt *= 1.0 + stock.draw(rng);
        bond_amt *= 1.0 + bond.draw(rng);
        total = stock_amt + bond_amt;

        if config.rebalance {
            stock_amt = config.stock_allocation * (total + config.additional_capital);
            bond_amt = config.bond_allocation * (total + config.additional_capital);
        } else {
            stock_amt += config.stock_allocation * config.additional_capital;
            bond_amt += config.bond_allocation * config.additional_capital;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_return_single_year_matches_closed_form() {
        let config = PortfolioConfig {
            years: 1,
            iterations: 10,
            seed: Some(1),
            verbosity: 0,
            ..PortfolioConfig::fixed_return(false)
        };

        let scenario = run_portfolio_scenario("fixed", &config).unwrap();

        // 27000 * (0.70 * 1.08 + 0.30 * 1.04) = 28836
        assert!((scenario.mean_accumulation - 28_836.0).abs() < 1e-6);
        assert_eq!(scenario.stdev_accumulation, 0.0);
        assert_eq!(scenario.interval.lower, scenario.interval.upper);
    }

    #[test]
    fn test_fixed_return_has_degenerate_statistics() {
        let config = PortfolioConfig {
            seed: Some(7),
            verbosity: 0,
            ..PortfolioConfig::fixed_return(false)
        };

        let scenario = run_portfolio_scenario("fixed", &config).unwrap();

        assert_eq!(scenario.stdev_accumulation, 0.0);
        assert_eq!(scenario.interval.lower, scenario.mean_accumulation);
        assert_eq!(scenario.interval.upper, scenario.mean_accumulation);
        // All trajectories identical, so every threshold probability is 0 or 1.
        for &(_, p) in &scenario.threshold_probabilities {
            assert!(p == 0.0 || p == 1.0);
        }
    }

    #[test]
    fn test_seeded_scenarios_are_reproducible() {
        let config = PortfolioConfig {
            iterations: 200,
            seed: Some(42),
            verbosity: 0,
            ..Default::default()
        };

        let a = run_portfolio_scenario("seeded", &config).unwrap();
        let b = run_portfolio_scenario("seeded", &config).unwrap();

        assert_eq!(a.mean_accumulation, b.mean_accumulation);
        assert_eq!(a.stdev_accumulation, b.stdev_accumulation);
        assert_eq!(a.interval, b.interval);
        assert_eq!(a.threshold_probabilities, b.threshold_probabilities);
    }

    #[test]
    fn test_suite_runs_four_scenarios() {
        let config = PortfolioConfig {
            iterations: 100,
            seed: Some(3),
            verbosity: 0,
            ..Default::default()
        };

        let report = run_portfolio_suite(&config).unwrap();

        assert_eq!(report.scenarios.len(), 4);
        assert!(!report.scenarios[0].rebalance);
        assert!(report.scenarios[2].rebalance);
        // The two fixed-return scenarios have zero spread.
        assert_eq!(report.scenarios[1].stdev_accumulation, 0.0);
        assert_eq!(report.scenarios[3].stdev_accumulation, 0.0);
        // The stochastic scenarios do not.
        assert!(report.scenarios[0].stdev_accumulation > 0.0);
        assert!(report.scenarios[2].stdev_accumulation > 0.0);
    }

    #[test]
    fn test_mean_accumulation_in_plausible_range() {
        let config = PortfolioConfig {
            seed: Some(2024),
            verbosity: 0,
            ..Default::default()
        };

        let scenario = run_portfolio_scenario("default", &config).unwrap();

        // The original exercise lands near $284k with these parameters.
        assert!(scenario.mean_accumulation > 230_000.0);
        assert!(scenario.mean_accumulation < 340_000.0);
        assert!(scenario.stdev_accumulation > 20_000.0);
    }
}
