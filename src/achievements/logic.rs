//! Milestone evaluators. They read the state and report what should unlock; the
//! controller applies the result.

use crate::core::config::GameConfig;
use crate::core::player_state::PlayerState;
use crate::progression::yields::actual_tick_yield;

/// Lifetime thresholds reached but not yet unlocked, ascending.
pub fn pending_achievements(state: &PlayerState, config: &GameConfig) -> Vec<u64> {
    config
        .achievement_thresholds
        .iter()
        .copied()
        .filter(|t| !state.unlocked_achievements.contains(t))
        .filter(|&t| state.total_primary_earned >= t as f64)
        .collect()
}

/// DPS thresholds reached by the current tick yield but not yet unlocked, ascending.
pub fn pending_dps_milestones(state: &PlayerState, config: &GameConfig) -> Vec<u64> {
    let dps = actual_tick_yield(state);
    config
        .dps_milestone_thresholds
        .iter()
        .copied()
        .filter(|t| !state.unlocked_dps_milestones.contains(t))
        .filter(|&t| dps >= t as f64)
        .collect()
}
