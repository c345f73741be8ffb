//! Statistical core shared by all three simulations.
//!
//! Three pieces compose the core: [`NormalSampler`] produces normally
//! distributed draws via the inverse-CDF transform, [`RunningStat`] is a
//! constant-memory streaming accumulator for mean and variance, and
//! [`confidence_interval`] builds a two-sided z-interval from an
//! accumulator snapshot. Each simulation owns fresh instances per
//! scenario; nothing here is shared across runs.

mod interval;
mod normal;
mod running;

pub use interval::{confidence_interval, ConfidenceInterval};
pub use normal::{standard_normal_cdf, standard_normal_quantile, NormalSampler};
pub use running::RunningStat;

use std::fmt;

/// Errors reported by the statistical core.
///
/// All errors are synchronous and indicate caller misuse rather than
/// transient failure; none are retried or recovered internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// A probability or confidence level fell outside the open interval (0, 1).
    Domain { name: &'static str, value: f64 },
    /// A statistic was requested before enough observations were recorded.
    InsufficientData { required: u64, actual: u64 },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Domain { name, value } => {
                write!(f, "{} must lie strictly inside (0, 1), got {}", name, value)
            }
            StatsError::InsufficientData { required, actual } => {
                write!(
                    f,
                    "statistic requires at least {} observations, have {}",
                    required, actual
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}
