//! Monte Carlo simulations built on the statistical core.
//!
//! Three independent console exercises share nothing but the core:
//! - portfolio accumulation with rebalancing variants
//! - a single-server queue with warmup discard
//! - a cardinal random walk with a falling-asleep probability
//!
//! Each scenario owns a fresh [`crate::stats::RunningStat`] and its own
//! seeded RNG streams, so runs are independently reproducible.

mod config;
mod portfolio;
mod queue;
mod report;
mod walk;

pub use config::{NormalParams, PortfolioConfig, QueueConfig, WalkConfig};
pub use portfolio::{run_portfolio_scenario, run_portfolio_suite};
pub use queue::run_queue;
pub use report::{PortfolioReport, PortfolioScenario, QueueReport, WalkReport};
pub use walk::run_walk;
