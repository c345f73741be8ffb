//! Two-sided confidence interval for a sample mean.

use super::{normal::standard_normal_quantile, StatsError};
use serde::Serialize;

/// Immutable interval bounds produced once from an accumulator snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Build a two-sided z-interval around `mean` from `n` observations with
/// sample standard deviation `stdev`.
///
/// Assumes the sampling distribution of the mean is approximately normal
/// (central-limit approximation; valid for the large n these simulations
/// use). When `stdev` is zero the interval degenerates to `{mean, mean}`
/// rather than failing, matching the fixed-return scenario where every
/// simulated outcome is identical.
///
/// Fails with [`StatsError::Domain`] unless 0 < `level` < 1, and with
/// [`StatsError::InsufficientData`] when `n` is zero.
pub fn confidence_interval(
    mean: f64,
    stdev: f64,
    n: u64,
    level: f64,
) -> Result<ConfidenceInterval, StatsError> {
    if !(level > 0.0 && level < 1.0) {
        return Err(StatsError::Domain {
            name: "confidence level",
            value: level,
        });
    }
    if n == 0 {
        return Err(StatsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if stdev == 0.0 {
        return Ok(ConfidenceInterval {
            lower: mean,
            upper: mean,
        });
    }

    let z = standard_normal_quantile(level)?;
    let margin = z * stdev / (n as f64).sqrt();
    Ok(ConfidenceInterval {
        lower: mean - margin,
        upper: mean + margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stdev_collapses_to_point() {
        let ci = confidence_interval(100.0, 0.0, 50, 0.95).unwrap();
        assert_eq!(ci.lower, 100.0);
        assert_eq!(ci.upper, 100.0);
        assert_eq!(ci.width(), 0.0);
    }

    #[test]
    fn test_interval_is_symmetric_about_the_mean() {
        let ci = confidence_interval(284_464.0, 54_429.0, 1000, 0.95).unwrap();
        let upper_margin = ci.upper - 284_464.0;
        let lower_margin = 284_464.0 - ci.lower;
        assert!((upper_margin - lower_margin).abs() < 1e-9 * upper_margin);
        assert!(ci.lower < 284_464.0 && 284_464.0 < ci.upper);
    }

    #[test]
    fn test_margin_uses_standard_error() {
        // z(0.95) ~ 1.6449; margin = z * 10 / sqrt(100) = z
        let ci = confidence_interval(0.0, 10.0, 100, 0.95).unwrap();
        assert!((ci.upper - 1.645).abs() < 1e-2);
    }

    #[test]
    fn test_rejects_bad_confidence_level() {
        for level in [0.0, 1.0, -0.1, 2.0] {
            assert!(matches!(
                confidence_interval(0.0, 1.0, 10, level),
                Err(StatsError::Domain { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_empty_sample() {
        assert!(matches!(
            confidence_interval(0.0, 1.0, 0, 0.95),
            Err(StatsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_narrows_with_sample_size() {
        let small = confidence_interval(50.0, 5.0, 100, 0.95).unwrap();
        let large = confidence_interval(50.0, 5.0, 10_000, 0.95).unwrap();
        assert!(large.width() < small.width());
    }
}
