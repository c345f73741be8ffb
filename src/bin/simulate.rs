//! Monte Carlo simulation CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- <portfolio|queue|walk> [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate -- portfolio              # four-scenario suite
//!   cargo run --bin simulate -- queue -s 42            # reproducible queue run
//!   cargo run --bin simulate -- walk -n 100000 --json  # walk + JSON report

use std::env;
use std::error::Error;
use std::process;

use stochastic_sims::simulator::{
    run_portfolio_scenario, run_portfolio_suite, run_queue, run_walk, PortfolioConfig,
    PortfolioReport, QueueConfig, WalkConfig,
};
use stochastic_sims::stats::StatsError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Portfolio,
    Queue,
    Walk,
}

#[derive(Debug, Default)]
struct Options {
    command: Option<Command>,
    iterations: Option<u32>,
    seed: Option<u64>,
    confidence: Option<f64>,
    rebalance_only: bool,
    save_json: bool,
    verbosity: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let command = match options.command {
        Some(command) => command,
        None => {
            print_help();
            process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║               MONTE CARLO SIMULATION SUITE                ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let (text, json, name) = match command {
        Command::Portfolio => {
            let mut config = PortfolioConfig {
                seed: options.seed,
                ..Default::default()
            };
            if let Some(n) = options.iterations {
                config.iterations = n;
            }
            if let Some(level) = options.confidence {
                config.confidence_level = level;
            }
            config.verbosity = options.verbosity;

            print!(
                "{}",
                config_echo("portfolio", "Iterations", config.iterations, config.seed)
            );
            let report = portfolio_report(&config, options.rebalance_only)?;
            (report.to_text(), report.to_json(), "portfolio")
        }
        Command::Queue => {
            let mut config = QueueConfig {
                seed: options.seed,
                ..Default::default()
            };
            if let Some(n) = options.iterations {
                config.arrivals = n;
            }
            if let Some(level) = options.confidence {
                config.confidence_level = level;
            }
            config.verbosity = options.verbosity;

            print!(
                "{}",
                config_echo("queue", "Arrivals", config.arrivals, config.seed)
            );
            let report = run_queue(&config)?;
            (report.to_text(), report.to_json(), "queue")
        }
        Command::Walk => {
            let mut config = WalkConfig {
                seed: options.seed,
                ..Default::default()
            };
            if let Some(n) = options.iterations {
                config.iterations = n;
            }
            if let Some(level) = options.confidence {
                config.confidence_level = level;
            }
            config.verbosity = options.verbosity;

            print!(
                "{}",
                config_echo("walk", "Iterations", config.iterations, config.seed)
            );
            let report = run_walk(&config)?;
            (report.to_text(), report.to_json(), "walk")
        }
    };

    println!("{}", text);

    if options.save_json {
        let filename = format!(
            "{}_report_{}.json",
            name,
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

/// Run the full four-scenario suite, or just the rebalanced scenario
/// when `--rebalance-only` was given.
fn portfolio_report(
    config: &PortfolioConfig,
    rebalance_only: bool,
) -> Result<PortfolioReport, StatsError> {
    if rebalance_only {
        let mut config = config.clone();
        config.rebalance = true;
        let scenario = run_portfolio_scenario("portfolio rebalanced", &config)?;
        Ok(PortfolioReport {
            scenarios: vec![scenario],
        })
    } else {
        run_portfolio_suite(config)
    }
}

/// Configuration echo printed before the run, labeled per simulation.
fn config_echo(name: &str, count_label: &str, count: u32, seed: Option<u64>) -> String {
    let mut echo = String::new();
    echo.push_str("Configuration:\n");
    echo.push_str(&format!("  Simulation:     {}\n", name));
    echo.push_str(&format!("  {:<16}{}\n", format!("{}:", count_label), count));
    if let Some(seed) = seed {
        echo.push_str(&format!("  Seed:           {}\n", seed));
    }
    echo.push('\n');
    echo.push_str("Running simulation...\n");
    echo.push('\n');
    echo
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        verbosity: 1,
        ..Default::default()
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "portfolio" => options.command = Some(Command::Portfolio),
            "queue" => options.command = Some(Command::Queue),
            "walk" => options.command = Some(Command::Walk),
            "-n" | "--iterations" => {
                if i + 1 < args.len() {
                    options.iterations = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--confidence" => {
                if i + 1 < args.len() {
                    options.confidence = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--rebalance-only" => {
                options.rebalance_only = true;
            }
            "--json" => {
                options.save_json = true;
            }
            "-v" | "--verbose" => {
                options.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Monte Carlo Simulation Suite");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- <SIMULATION> [OPTIONS]");
    println!();
    println!("SIMULATIONS:");
    println!("    portfolio           Investment accumulation, four-scenario suite");
    println!("    queue               Single-server queue with warmup discard");
    println!("    walk                Cardinal random walk with sleep probability");
    println!();
    println!("OPTIONS:");
    println!("    -n, --iterations <N>   Trajectories / arrivals / walks");
    println!("    -s, --seed <S>         Random seed for reproducibility");
    println!("    -c, --confidence <C>   Confidence level in (0, 1) (default: 0.95)");
    println!("    --rebalance-only       Portfolio: run only the rebalanced scenario");
    println!("    --json                 Save a timestamped JSON report");
    println!("    -v, --verbose          Verbose output");
    println!("    -h, --help             Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate -- portfolio --seed 42");
    println!("    cargo run --bin simulate -- portfolio --rebalance-only -s 42");
    println!("    cargo run --bin simulate -- queue -n 5000");
    println!("    cargo run --bin simulate -- walk -n 100000 --json");
}
