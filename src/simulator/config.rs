//! Simulation configurations.
//!
//! Defaults reproduce the parameters the original exercises were run
//! with; every knob is exposed so alternative scenarios can be built
//! from `..Default::default()`.

use serde::Serialize;

/// Mean and standard deviation of a normally distributed quantity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NormalParams {
    pub mean: f64,
    pub stdev: f64,
}

impl NormalParams {
    pub fn new(mean: f64, stdev: f64) -> Self {
        Self { mean, stdev }
    }

    /// Same mean with the variability removed (fixed outcome).
    pub fn fixed(&self) -> Self {
        Self {
            mean: self.mean,
            stdev: 0.0,
        }
    }
}

/// Configuration for the portfolio accumulation simulation.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Capital invested at the start of year one
    pub initial_capital: f64,

    /// Capital added at the end of each year
    pub additional_capital: f64,

    /// Fraction of the portfolio targeted at stocks
    pub stock_allocation: f64,

    /// Fraction of the portfolio targeted at bonds
    pub bond_allocation: f64,

    /// Annual stock return distribution
    pub stock_return: NormalParams,

    /// Annual bond return distribution
    pub bond_return: NormalParams,

    /// Number of years each trajectory is accumulated
    pub years: u32,

    /// Number of Monte Carlo trajectories per scenario
    pub iterations: u32,

    /// Confidence level for the interval on the mean accumulation
    pub confidence_level: f64,

    /// Whether sleeves are reset to target allocations each year
    pub rebalance: bool,

    /// Accumulation levels reported as exceedance probabilities
    pub thresholds: Vec<f64>,

    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-scenario detail)
    pub verbosity: u8,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            initial_capital: 27_000.0,
            additional_capital: 10_000.0,
            stock_allocation: 0.70,
            bond_allocation: 0.30,
            stock_return: NormalParams::new(0.08, 0.10),
            bond_return: NormalParams::new(0.04, 0.04),
            years: 14,
            iterations: 1000,
            confidence_level: 0.95,
            rebalance: false,
            thresholds: vec![240_000.0, 270_000.0, 300_000.0],
            seed: None,
            verbosity: 1,
        }
    }
}

impl PortfolioConfig {
    /// Quick config with return variability removed (fixed return).
    pub fn fixed_return(rebalance: bool) -> Self {
        let base = Self::default();
        Self {
            stock_return: base.stock_return.fixed(),
            bond_return: base.bond_return.fixed(),
            rebalance,
            ..base
        }
    }

    /// Quick config with annual rebalancing enabled.
    pub fn rebalanced() -> Self {
        Self {
            rebalance: true,
            ..Default::default()
        }
    }
}

/// Configuration for the single-server queue simulation.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Total number of customer arrivals to simulate
    pub arrivals: u32,

    /// Leading arrivals excluded from the summary statistics
    pub warmup: u32,

    /// Lower bound of the uniform inter-arrival time
    pub interarrival_min: f64,

    /// Upper bound of the uniform inter-arrival time
    pub interarrival_max: f64,

    /// Service time distribution
    pub service: NormalParams,

    /// Confidence level for the interval on the mean waiting time
    pub confidence_level: f64,

    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-customer trace)
    pub verbosity: u8,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            arrivals: 1116,
            warmup: 100,
            interarrival_min: 0.0,
            interarrival_max: 5.0,
            service: NormalParams::new(2.0, 0.5),
            confidence_level: 0.95,
            seed: None,
            verbosity: 1,
        }
    }
}

/// Configuration for the random walk simulation.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Minutes in each walk (one potential block per minute)
    pub minutes: u32,

    /// Number of simulated walks
    pub iterations: u32,

    /// Probability of falling asleep in any given minute
    pub sleep_probability: f64,

    /// Distance considered "near the store", in blocks
    pub near_distance: i64,

    /// Confidence level for the interval on the mean distance
    pub confidence_level: f64,

    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-walk trace)
    pub verbosity: u8,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            minutes: 10,
            iterations: 10_000,
            sleep_probability: 0.32,
            near_distance: 2,
            confidence_level: 0.95,
            seed: None,
            verbosity: 1,
        }
    }
}
