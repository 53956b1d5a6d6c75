//! Yield formulas. Pure functions over `&PlayerState`.
//!
//! Click: `(1 + click_effect) * global * (1 + prestige_bonus) * permanent`
//! Tick:  `tick_effect * global * (1 + prestige_bonus) * permanent`
//!
//! The factors are always multiplied in this order so saved and recomputed values
//! agree bit for bit.

use crate::core::config::GameConfig;
use crate::core::constants::CRIT_CHANCE_CAP;
use crate::core::player_state::PlayerState;
use crate::economy::{UpgradeCategory, UpgradeId, CRIT_SOURCE, PERMANENT_UPGRADES, UPGRADES};

/// Sum of click-yield upgrade effects.
pub fn click_effect(state: &PlayerState) -> f64 {
    category_effect(state, |c| matches!(c, UpgradeCategory::ClickYield))
}

/// Sum of tick-yield upgrade effects.
pub fn tick_effect(state: &PlayerState) -> f64 {
    category_effect(state, |c| matches!(c, UpgradeCategory::TickYield))
}

fn category_effect(state: &PlayerState, wanted: impl Fn(&UpgradeCategory) -> bool) -> f64 {
    UPGRADES
        .iter()
        .filter(|def| wanted(&def.category))
        .map(|def| def.effect(state.level(def.id)))
        .sum()
}

/// Product of every global-multiplier upgrade at its current level.
pub fn global_multiplier(state: &PlayerState) -> f64 {
    UPGRADES
        .iter()
        .map(|def| def.global_multiplier(state.level(def.id)))
        .product()
}

/// `1 + Σ` yield-factor bonuses of the permanent upgrades owned.
pub fn permanent_bonus_factor(state: &PlayerState) -> f64 {
    1.0 + PERMANENT_UPGRADES
        .iter()
        .map(|def| def.yield_factor_bonus(state.permanent_level(def.id)))
        .sum::<f64>()
}

/// Crit chance granted by permanent upgrades.
pub fn permanent_crit_bonus(state: &PlayerState) -> f64 {
    PERMANENT_UPGRADES
        .iter()
        .map(|def| def.crit_chance_bonus(state.permanent_level(def.id)))
        .sum()
}

pub fn prestige_bonus(state: &PlayerState, config: &GameConfig) -> f64 {
    state.secondary_currency * config.prestige_bonus_per_pearl
}

/// Unfloored fish per click before any crit.
pub fn actual_click_yield(state: &PlayerState) -> f64 {
    (1.0 + click_effect(state))
        * state.global_multiplier
        * (1.0 + state.prestige_bonus)
        * state.permanent_bonus_factor
}

/// Unfloored fish per tick. Zero until a tick-yield upgrade is owned.
pub fn actual_tick_yield(state: &PlayerState) -> f64 {
    tick_effect(state)
        * state.global_multiplier
        * (1.0 + state.prestige_bonus)
        * state.permanent_bonus_factor
}

/// Crit chance from the crit upgrade alone.
pub fn base_crit_chance(state: &PlayerState) -> f64 {
    CRIT_SOURCE.definition().crit_chance(state.level(CRIT_SOURCE))
}

/// Upgrade plus permanent crit chance, capped after summing.
pub fn total_crit_chance(state: &PlayerState) -> f64 {
    (base_crit_chance(state) + permanent_crit_bonus(state)).min(CRIT_CHANCE_CAP)
}

/// Whether the passive schedule should be running.
pub fn passive_yield_active(state: &PlayerState) -> bool {
    UpgradeId::ALL.into_iter().any(|id| {
        matches!(id.definition().category, UpgradeCategory::TickYield) && state.level(id) > 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::PermanentUpgradeId;

    fn refreshed(mut state: PlayerState) -> PlayerState {
        state.refresh_derived(&GameConfig::default());
        state
    }

    #[test]
    fn test_fresh_state_yields() {
        let state = PlayerState::default();
        assert_eq!(actual_click_yield(&state), 1.0);
        assert_eq!(actual_tick_yield(&state), 0.0);
        assert!((total_crit_chance(&state) - 0.05).abs() < 1e-12);
        assert!(!passive_yield_active(&state));
    }

    #[test]
    fn test_click_yield_with_click_upgrade() {
        let mut state = PlayerState::default();
        state.upgrades.insert(UpgradeId::ClickPower, 2);
        assert_eq!(actual_click_yield(&refreshed(state)), 3.0);
    }

    #[test]
    fn test_all_factors_multiply() {
        let mut state = PlayerState::default();
        state.upgrades.insert(UpgradeId::ClickPower, 1);
        state.upgrades.insert(UpgradeId::AutoFishing, 4);
        state.upgrades.insert(UpgradeId::CatCompanion, 5);
        state.secondary_currency = 2.0;
        state
            .permanent_upgrades
            .insert(PermanentUpgradeId::GoldenRod, 2);
        let state = refreshed(state);

        // 2 * 1.5 * 1.1 * 1.2
        assert!((actual_click_yield(&state) - 3.96).abs() < 1e-9);
        // 4 * 1.5 * 1.1 * 1.2
        assert!((actual_tick_yield(&state) - 7.92).abs() < 1e-9);
        assert!(passive_yield_active(&state));
    }

    #[test]
    fn test_crit_chance_sums_then_caps() {
        let mut state = PlayerState::default();
        state.upgrades.insert(UpgradeId::LuckyFish, 10);
        state
            .permanent_upgrades
            .insert(PermanentUpgradeId::LuckyCharm, 5);
        // 0.05 + 0.20 + 0.10
        assert!((total_crit_chance(&state) - 0.35).abs() < 1e-12);

        state.upgrades.insert(UpgradeId::LuckyFish, 60);
        assert_eq!(total_crit_chance(&state), 1.0);
    }

    #[test]
    fn test_permanent_factor_includes_one_shot() {
        let mut state = PlayerState::default();
        state
            .permanent_upgrades
            .insert(PermanentUpgradeId::EternalNet, 1);
        state
            .permanent_upgrades
            .insert(PermanentUpgradeId::GoldenRod, 1);
        assert!((permanent_bonus_factor(&state) - 1.6).abs() < 1e-12);
    }
}
