//! Streaming mean/variance accumulator (Welford/Knuth recurrence).

use super::StatsError;

/// Online accumulator for mean, variance, and standard deviation.
///
/// Observations are incorporated one at a time in constant memory using
/// the numerically stable Welford recurrence, which avoids the
/// catastrophic cancellation of the naive sum-of-squares formula and
/// supports unbounded-length streams. Append-only; there is no removal.
#[derive(Debug, Clone, Default)]
pub struct RunningStat {
    count: u64,
    mean: f64,
    /// Running sum of squared deviations from the current mean.
    sum_sq: f64,
}

impl RunningStat {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporate one observation.
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let old_mean = self.mean;
        self.mean += (x - old_mean) / self.count as f64;
        self.sum_sq += (x - old_mean) * (x - self.mean);
    }

    /// Number of observations pushed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean. Requires at least one observation.
    pub fn mean(&self) -> Result<f64, StatsError> {
        if self.count == 0 {
            return Err(StatsError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        Ok(self.mean)
    }

    /// Bessel-corrected sample variance. Requires at least two observations.
    pub fn variance(&self) -> Result<f64, StatsError> {
        if self.count < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: self.count,
            });
        }
        Ok(self.sum_sq / (self.count - 1) as f64)
    }

    /// Sample standard deviation. Requires at least two observations.
    pub fn stdev(&self) -> Result<f64, StatsError> {
        Ok(self.variance()?.sqrt())
    }
}
