//! Discrete random walk with a falling-asleep probability.
//!
//! The walker always covers one block east in the first minute. In each
//! later minute he falls asleep with a fixed probability (covering no
//! ground) or walks one block in a uniformly random cardinal direction.
//! Distance from the start is Manhattan distance over the net
//! displacement; block counts and distances stream into [`RunningStat`]s.

use super::config::WalkConfig;
use super::report::WalkReport;
use crate::stats::{confidence_interval, RunningStat, StatsError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Blocks walked in each cardinal direction over one walk.
#[derive(Debug, Clone, Copy, Default)]
struct CardinalCounts {
    north: u32,
    east: u32,
    south: u32,
    west: u32,
}

impl CardinalCounts {
    fn blocks_walked(&self) -> u32 {
        self.north + self.east + self.south + self.west
    }

    /// Manhattan distance of the net displacement from the start.
    fn distance(&self) -> i64 {
        let ns = self.north as i64 - self.south as i64;
        let ew = self.east as i64 - self.west as i64;
        ns.abs() + ew.abs()
    }
}

/// Run the walk simulation and summarize distances over all iterations.
pub fn run_walk(config: &WalkConfig) -> Result<WalkReport, StatsError> {
    // Sleep checks and direction choices keep independent streams, as in
    // the original's two separately seeded generators.
    let (mut sleep_rng, mut direction_rng) = match config.seed {
        Some(seed) => (
            ChaCha8Rng::seed_from_u64(seed),
            ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
    };

    let mut blocks = RunningStat::new();
    let mut distances = RunningStat::new();
    let mut near_count = 0u32;

    for walk in 0..config.iterations {
        let counts = simulate_walk(config, &mut sleep_rng, &mut direction_rng);

        if config.verbosity >= 2 {
            println!(
                "Walk {}/{} - {} blocks walked, distance {}",
                walk + 1,
                config.iterations,
                counts.blocks_walked(),
                counts.distance()
            );
        }

        blocks.push(counts.blocks_walked() as f64);
        distances.push(counts.distance() as f64);
        if counts.distance() <= config.near_distance {
            near_count += 1;
        }
    }

    let mean_distance = distances.mean()?;
    let stdev_distance = distances.stdev()?;
    let interval = confidence_interval(
        mean_distance,
        stdev_distance,
        distances.count(),
        config.confidence_level,
    )?;

    Ok(WalkReport {
        iterations: config.iterations,
        minutes: config.minutes,
        sleep_probability: config.sleep_probability,
        near_distance: config.near_distance,
        p_near: near_count as f64 / config.iterations as f64,
        mean_blocks_walked: blocks.mean()?,
        mean_distance,
        stdev_distance,
        confidence_level: config.confidence_level,
        interval,
    })
}

fn simulate_walk(
    config: &WalkConfig,
    sleep_rng: &mut ChaCha8Rng,
    direction_rng: &mut ChaCha8Rng,
) -> CardinalCounts {
    let mut counts = CardinalCounts::default();

    // He always walks east in the first minute.
    counts.east += 1;

    for _ in 1..config.minutes {
        if sleep_rng.gen_range(0.0..1.0) <= config.sleep_probability {
            continue;
        }
        match direction_rng.gen_range(0..4) {
            0 => counts.north += 1,
            1 => counts.east += 1,
            2 => counts.south += 1,
            _ => counts.west += 1,
        }
    }

    counts
}
