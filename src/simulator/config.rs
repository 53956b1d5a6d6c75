//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`, wrapping.
    pub seed: Option<u64>,

    /// Simulated play time per run, in seconds
    pub seconds: u64,

    /// Clicks the simulated player makes every second
    pub clicks_per_second: u32,

    /// Whether the player prestiges as soon as it pays out
    pub simulate_prestige: bool,

    /// Whether pearls are spent on permanent upgrades
    pub buy_permanent: bool,

    /// Balance knobs under test
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10,
            seed: None,
            seconds: 3_600,
            clicks_per_second: 5,
            simulate_prestige: true,
            buy_permanent: true,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Slow clicker that never prestiges; shows how far passive yield carries.
    pub fn idle_test(seconds: u64) -> Self {
        Self {
            num_runs: 1,
            seconds,
            clicks_per_second: 1,
            simulate_prestige: false,
            buy_permanent: false,
            ..Default::default()
        }
    }

    /// A long session with prestige cycles.
    pub fn full_progression_test() -> Self {
        Self {
            num_runs: 5,
            seconds: 6 * 3_600,
            ..Default::default()
        }
    }
}
