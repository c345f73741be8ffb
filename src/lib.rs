//! Monte Carlo simulation suite for three stochastic-process exercises.
//!
//! This library exposes a small statistical core (inverse-CDF normal
//! sampling, a streaming mean/variance accumulator, and confidence
//! intervals) together with the three console simulations that drive it:
//! an investment portfolio accumulation model, a single-server queue,
//! and a cardinal random walk.

pub mod simulator;
pub mod stats;
