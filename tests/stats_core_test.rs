//! Integration test: statistical core properties
//!
//! Exercises the inverse-CDF sampler, the streaming accumulator, and the
//! confidence interval together, the way the simulations drive them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stochastic_sims::stats::{
    confidence_interval, standard_normal_cdf, standard_normal_quantile, NormalSampler,
    RunningStat,
};

/// Feed `n` sampler draws into a fresh accumulator.
fn accumulate_draws(mean: f64, stdev: f64, n: u64, seed: u64) -> RunningStat {
    let sampler = NormalSampler::new(mean, stdev);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stat = RunningStat::new();
    for _ in 0..n {
        stat.push(sampler.draw(&mut rng));
    }
    stat
}

#[test]
fn test_sampler_recovers_stock_return_parameters() {
    // The original exercise's self-test: a million draws at the stock
    // return parameters recover mean and stdev within 1%.
    let stat = accumulate_draws(0.08, 0.10, 1_000_000, 1234);

    let mean = stat.mean().unwrap();
    let stdev = stat.stdev().unwrap();
    assert!((mean - 0.08).abs() < 0.08 * 0.01, "mean off: {}", mean);
    assert!((stdev - 0.10).abs() < 0.10 * 0.01, "stdev off: {}", stdev);
}

#[test]
fn test_sampler_recovers_bond_return_parameters() {
    let stat = accumulate_draws(0.04, 0.04, 1_000_000, 5678);

    let mean = stat.mean().unwrap();
    let stdev = stat.stdev().unwrap();
    assert!((mean - 0.04).abs() < 0.04 * 0.01, "mean off: {}", mean);
    assert!((stdev - 0.04).abs() < 0.04 * 0.01, "stdev off: {}", stdev);
}

#[test]
fn test_quantile_cdf_round_trip_across_the_domain() {
    for i in 1..10_000 {
        let p = i as f64 / 10_000.0;
        if !(0.0001..=0.9999).contains(&p) {
            continue;
        }
        let z = standard_normal_quantile(p).unwrap();
        assert!(
            (standard_normal_cdf(z) - p).abs() < 1e-3,
            "round trip failed at p = {}",
            p
        );
    }
}

#[test]
fn test_interval_from_accumulator_snapshot() {
    let stat = accumulate_draws(100.0, 15.0, 100_000, 9);

    let mean = stat.mean().unwrap();
    let stdev = stat.stdev().unwrap();
    let ci = confidence_interval(mean, stdev, stat.count(), 0.95).unwrap();

    // Symmetric about the mean, and tight at this sample size.
    assert!(((ci.upper - mean) - (mean - ci.lower)).abs() < 1e-9);
    assert!(ci.width() < 1.0);
    assert!(ci.lower < mean && mean < ci.upper);
    // The estimate itself sits close to the true mean.
    assert!((mean - 100.0).abs() < 0.5);
}

#[test]
fn test_degenerate_interval_is_exact() {
    let ci = confidence_interval(100.0, 0.0, 50, 0.95).unwrap();
    assert_eq!(ci.lower, 100.0);
    assert_eq!(ci.upper, 100.0);
}

#[test]
fn test_accumulator_ignores_observation_order() {
    let data = [283_919.7, 240_000.0, 300_000.0, 119_220.5, 404_965.25];

    let mut forward = RunningStat::new();
    for &x in &data {
        forward.push(x);
    }
    let mut reverse = RunningStat::new();
    for &x in data.iter().rev() {
        reverse.push(x);
    }

    assert!((forward.mean().unwrap() - reverse.mean().unwrap()).abs() < 1e-6);
    assert!((forward.variance().unwrap() - reverse.variance().unwrap()).abs() < 1e-3);
}
