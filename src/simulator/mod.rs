//! Balance simulator.
//!
//! Plays seeded sessions against the real `ProgressionController` with a greedy
//! policy to measure how quickly the economy opens up:
//! - Fish earned and yield growth over a session
//! - Time to first prestige
//! - Achievement, DPS milestone and cosmetic unlock pace

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
