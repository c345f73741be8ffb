//! Simulation report types and formatting.

use super::config::NormalParams;
use crate::stats::ConfidenceInterval;
use serde::Serialize;

/// Results of one portfolio scenario.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioScenario {
    pub label: String,
    pub stock_return: NormalParams,
    pub bond_return: NormalParams,
    pub rebalance: bool,
    pub iterations: u32,
    pub confidence_level: f64,
    pub mean_accumulation: f64,
    pub stdev_accumulation: f64,
    /// (threshold, probability the accumulation exceeds it)
    pub threshold_probabilities: Vec<(f64, f64)>,
    /// Interval for the mean accumulation, not for the accumulation
    /// distribution itself.
    pub interval: ConfidenceInterval,
}

/// Aggregated results of the portfolio scenario suite.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    pub scenarios: Vec<PortfolioScenario>,
}

impl PortfolioReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════\n");
        report.push_str("              PORTFOLIO ACCUMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════\n");

        for scenario in &self.scenarios {
            report.push_str(&format!("\nScenario: {}\n", scenario.label));
            report.push_str("── PARAMETERS ─────────────────────────────────────────────\n");
            report.push_str(&format!(
                "  Mean stock return   : {:.2}\n",
                scenario.stock_return.mean
            ));
            report.push_str(&format!(
                "  Stdev stock returns : {:.2}\n",
                scenario.stock_return.stdev
            ));
            report.push_str(&format!(
                "  Mean bond return    : {:.2}\n",
                scenario.bond_return.mean
            ));
            report.push_str(&format!(
                "  Stdev bond returns  : {:.2}\n",
                scenario.bond_return.stdev
            ));
            report.push_str(&format!(
                "  Rebalance portfolio : {}\n",
                scenario.rebalance
            ));
            report.push_str(&format!("  Iterations          : {}\n", scenario.iterations));

            report.push_str("── OUTPUTS ────────────────────────────────────────────────\n");
            report.push_str(&format!(
                "  Mean accumulation   : ${:.0}\n",
                scenario.mean_accumulation
            ));
            report.push_str(&format!(
                "  Stdev accumulation  : ${:.0}\n",
                scenario.stdev_accumulation
            ));
            for &(level, p) in &scenario.threshold_probabilities {
                report.push_str(&format!("  P(acc > ${:.0})    : {:.2}\n", level, p));
            }
            report.push_str(&format!(
                "  {:.0}% CI (mean acc)  : (${:.0}, ${:.0})\n",
                scenario.confidence_level * 100.0,
                scenario.interval.lower,
                scenario.interval.upper
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Results of the queueing simulation.
#[derive(Debug, Clone, Serialize)]
pub struct QueueReport {
    pub arrivals: u32,
    pub warmup: u32,
    /// Customers contributing to the statistics (post-warmup)
    pub observed: u64,
    pub num_waited: u32,
    pub p_wait: f64,
    pub num_waited_over_minute: u32,
    pub p_wait_over_minute: f64,
    pub mean_wait: f64,
    pub stdev_wait: f64,
    pub max_wait: f64,
    pub utilization: f64,
    pub confidence_level: f64,
    pub interval: ConfidenceInterval,
}

impl QueueReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════\n");
        report.push_str("               SINGLE-SERVER QUEUE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "  Arrivals            : {} ({} warmup discarded)\n",
            self.arrivals, self.warmup
        ));
        report.push_str(&format!("  Observed customers  : {}\n\n", self.observed));

        report.push_str(&format!("  Number waiting      : {}\n", self.num_waited));
        report.push_str(&format!("  P(wait)             : {:.2}\n", self.p_wait));
        report.push_str(&format!(
            "  Number waiting > 1m : {}\n",
            self.num_waited_over_minute
        ));
        report.push_str(&format!(
            "  P(wait > 1 minute)  : {:.2}\n",
            self.p_wait_over_minute
        ));
        report.push_str(&format!("  Average waiting time: {:.2}\n", self.mean_wait));
        report.push_str(&format!("  Stdev waiting time  : {:.2}\n", self.stdev_wait));
        report.push_str(&format!("  Maximum waiting time: {:.2}\n", self.max_wait));
        report.push_str(&format!("  Utilization         : {:.2}\n", self.utilization));
        report.push_str(&format!(
            "  {:.0}% CI (mean wait) : ({:.2}, {:.2})\n",
            self.confidence_level * 100.0,
            self.interval.lower,
            self.interval.upper
        ));

        report.push_str("\n═══════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Results of the random walk simulation.
#[derive(Debug, Clone, Serialize)]
pub struct WalkReport {
    pub iterations: u32,
    pub minutes: u32,
    pub sleep_probability: f64,
    pub near_distance: i64,
    pub p_near: f64,
    pub mean_blocks_walked: f64,
    pub mean_distance: f64,
    pub stdev_distance: f64,
    pub confidence_level: f64,
    pub interval: ConfidenceInterval,
}

impl WalkReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════\n");
        report.push_str("                  RANDOM WALK REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("  Iterations              : {}\n", self.iterations));
        report.push_str(&format!("  Minutes per walk        : {}\n", self.minutes));
        report.push_str(&format!(
            "  P(asleep per minute)    : {:.2}\n\n",
            self.sleep_probability
        ));

        report.push_str(&format!(
            "  P(within {} blocks)      : {:.4}\n",
            self.near_distance, self.p_near
        ));
        report.push_str(&format!(
            "  Average blocks walked   : {:.4}\n",
            self.mean_blocks_walked
        ));
        report.push_str(&format!(
            "  Average distance        : {:.4}\n",
            self.mean_distance
        ));
        report.push_str(&format!(
            "  Stdev distance          : {:.4}\n",
            self.stdev_distance
        ));
        report.push_str(&format!(
            "  {:.0}% CI (mean distance) : ({:.4}, {:.4})\n",
            self.confidence_level * 100.0,
            self.interval.lower,
            self.interval.upper
        ));

        report.push_str("\n═══════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
