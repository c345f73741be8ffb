//! Single-server queueing simulation.
//!
//! Customers arrive with uniform inter-arrival times and are served in
//! order by one server with normally distributed service times. The
//! standard recurrence applies: service starts at the later of the
//! customer's arrival and the previous customer's completion. Waiting
//! times observed after the warmup period stream into a [`RunningStat`].

use super::config::QueueConfig;
use super::report::QueueReport;
use crate::stats::{confidence_interval, NormalSampler, RunningStat, StatsError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the queue simulation and summarize post-warmup waiting times.
pub fn run_queue(config: &QueueConfig) -> Result<QueueReport, StatsError> {
    // Arrival and service processes keep independent streams, as in the
    // original's two separately seeded engines.
    let (mut arrival_rng, mut service_rng) = match config.seed {
        Some(seed) => (
            ChaCha8Rng::seed_from_u64(seed),
            ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
    };

    let service = NormalSampler::new(config.service.mean, config.service.stdev);

    let mut arrival = 0.0_f64;
    let mut finish = 0.0_f64;

    let mut waits = RunningStat::new();
    let mut num_waited = 0u32;
    let mut num_waited_over_minute = 0u32;
    let mut max_wait = 0.0_f64;
    let mut total_service = 0.0_f64;

    if config.verbosity >= 2 {
        println!("customer  arrival  start  wait  service  finish");
    }

    for customer in 0..config.arrivals {
        let interarrival =
            arrival_rng.gen_range(config.interarrival_min..config.interarrival_max);
        arrival += interarrival;

        let service_start = arrival.max(finish);
        let wait = service_start - arrival;
        let service_time = service.draw(&mut service_rng);
        finish = service_start + service_time;

        if config.verbosity >= 2 {
            println!(
                "{:8}  {:7.2}  {:5.2}  {:4.2}  {:7.2}  {:6.2}",
                customer, arrival, service_start, wait, service_time, finish
            );
        }

        if customer < config.warmup {
            continue;
        }

        waits.push(wait);
        if wait > 0.0 {
            num_waited += 1;
        }
        if wait > 1.0 {
            num_waited_over_minute += 1;
        }
        if wait > max_wait {
            max_wait = wait;
        }
        total_service += service_time;
    }

    let observed = waits.count();
    let mean_wait = waits.mean()?;
    let stdev_wait = waits.stdev()?;
    let interval = confidence_interval(mean_wait, stdev_wait, observed, config.confidence_level)?;

    Ok(QueueReport {
        arrivals: config.arrivals,
        warmup: config.warmup,
        observed,
        num_waited,
        p_wait: num_waited as f64 / observed as f64,
        num_waited_over_minute,
        p_wait_over_minute: num_waited_over_minute as f64 / observed as f64,
        mean_wait,
        stdev_wait,
        max_wait,
        utilization: total_service / finish,
        confidence_level: config.confidence_level,
        interval,
    })
}
