//! Balance simulator CLI.
//!
//! Plays seeded greedy sessions and prints how the economy paces out.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 10 runs of one hour each
//!   cargo run --bin simulate -- -n 3 --minutes 30
//!   cargo run --bin simulate -- --seed 42 --json # Reproducible, machine-readable
//!
//! Set `RUST_LOG=debug` for per-run lines.

use catfish::simulator::{run_simulation, SimConfig};
use catfish::GameConfig;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if !json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              CATFISH BALANCE SIMULATOR                        ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Session:        {}s", config.seconds);
        println!("  Clicks/sec:     {}", config.clicks_per_second);
        println!("  Prestige:       {}", config.simulate_prestige);
        println!("  Permanent:      {}", config.buy_permanent);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
    }

    let report = run_simulation(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse().unwrap_or(3_600);
                    i += 1;
                }
            }
            "-m" | "--minutes" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse::<u64>().unwrap_or(60) * 60;
                    i += 1;
                }
            }
            "-c" | "--cps" => {
                if i + 1 < args.len() {
                    config.clicks_per_second = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config.game = load_game_config(&args[i + 1]);
                    i += 1;
                }
            }
            "--no-prestige" => {
                config.simulate_prestige = false;
            }
            "--no-permanent" => {
                config.buy_permanent = false;
            }
            "--json" => {
                json = true;
            }
            "--idle" => {
                config = SimConfig::idle_test(config.seconds);
            }
            "--full" => {
                config = SimConfig::full_progression_test();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, json)
}

fn load_game_config(path: &str) -> GameConfig {
    match std::fs::read_to_string(path) {
        Ok(json) => GameConfig::from_json_str(&json),
        Err(e) => {
            eprintln!("Could not read balance config {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("Catfish Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of sessions (default: 10)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --seconds <S>         Session length in seconds (default: 3600)");
    println!("    -m, --minutes <M>     Session length in minutes");
    println!("    -c, --cps <C>         Clicks per second (default: 5)");
    println!("    --config <FILE>       Balance overrides as JSON");
    println!("    --no-prestige         Never prestige");
    println!("    --no-permanent        Never spend pearls");
    println!("    --idle                One click per second, no prestige");
    println!("    --full                Five six-hour sessions");
    println!("    --json                Print the report as JSON");
    println!("    -h, --help            Show this help");
}
