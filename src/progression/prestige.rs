//! Prestige: trade this run's progress for pearls.
//!
//! Payout is measured against lifetime earnings, so a second prestige right after
//! the first grants nothing until enough new fish have been caught. Pearls already
//! granted are tracked separately from pearls on hand; spending pearls on permanent
//! upgrades does not make them earnable again.

use crate::core::config::GameConfig;
use crate::core::player_state::PlayerState;

/// What a prestige would do right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrestigePreview {
    pub can_prestige: bool,
    /// Pearls the next prestige would grant.
    pub earnable: f64,
    /// Lifetime fish still needed before the first prestige is allowed.
    pub remaining_to_requirement: f64,
    /// Pearls on hand after committing.
    pub resulting_secondary: f64,
    /// Yield bonus after committing.
    pub resulting_prestige_bonus: f64,
}

/// `max(floor(total / requirement) - granted_so_far, 0)`
pub fn earnable_pearls(state: &PlayerState, config: &GameConfig) -> f64 {
    let lifetime = (state.total_primary_earned / config.prestige_requirement).floor();
    (lifetime - state.secondary_earned_total).max(0.0)
}

/// Eligible once lifetime earnings reach the requirement and a payout is pending.
pub fn can_prestige(state: &PlayerState, config: &GameConfig) -> bool {
    state.total_primary_earned >= config.prestige_requirement
        && earnable_pearls(state, config) > 0.0
}

pub fn preview(state: &PlayerState, config: &GameConfig) -> PrestigePreview {
    let earnable = earnable_pearls(state, config);
    let resulting_secondary = state.secondary_currency + earnable;
    PrestigePreview {
        can_prestige: can_prestige(state, config),
        earnable,
        remaining_to_requirement: (config.prestige_requirement - state.total_primary_earned)
            .max(0.0),
        resulting_secondary,
        resulting_prestige_bonus: resulting_secondary * config.prestige_bonus_per_pearl,
    }
}

/// Performs the reset. Returns the pearls granted, or `None` (state untouched) when
/// not eligible.
///
/// Kept: lifetime earnings, pearls, permanent upgrades, achievements, DPS milestones,
/// cosmetics, mute. Reset: fish on hand and every fish-priced upgrade.
pub(crate) fn perform_prestige(state: &mut PlayerState, config: &GameConfig) -> Option<f64> {
    if !can_prestige(state, config) {
        return None;
    }
    let earned = earnable_pearls(state, config);

    state.secondary_currency += earned;
    state.secondary_earned_total += earned;
    state.primary_currency = 0.0;
    for level in state.upgrades.values_mut() {
        *level = 0;
    }
    state.refresh_derived(config);

    Some(earned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{PermanentUpgradeId, UpgradeId};

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn state_with_lifetime(total: f64) -> PlayerState {
        PlayerState {
            primary_currency: total,
            total_primary_earned: total,
            ..PlayerState::default()
        }
    }

    #[test]
    fn test_preview_example() {
        let state = state_with_lifetime(25_000.0);
        let preview = preview(&state, &config());
        assert!(preview.can_prestige);
        assert_eq!(preview.earnable, 2.0);
        assert_eq!(preview.resulting_secondary, 2.0);
        assert!((preview.resulting_prestige_bonus - 0.1).abs() < 1e-12);
        assert_eq!(preview.remaining_to_requirement, 0.0);
    }

    #[test]
    fn test_below_requirement_cannot_prestige() {
        let state = state_with_lifetime(9_999.0);
        assert!(!can_prestige(&state, &config()));
        assert_eq!(preview(&state, &config()).remaining_to_requirement, 1.0);

        let mut after = state.clone();
        assert_eq!(perform_prestige(&mut after, &config()), None);
        assert_eq!(after, state);
    }

    #[test]
    fn test_perform_prestige_post_conditions() {
        let mut state = state_with_lifetime(25_000.0);
        state.upgrades.insert(UpgradeId::ClickPower, 5);
        state.upgrades.insert(UpgradeId::CatCompanion, 2);
        state
            .permanent_upgrades
            .insert(PermanentUpgradeId::GoldenRod, 1);
        state.unlocked_achievements.insert(100);
        state.refresh_derived(&config());

        let granted = perform_prestige(&mut state, &config());
        assert_eq!(granted, Some(2.0));
        assert_eq!(state.primary_currency, 0.0);
        assert_eq!(state.total_primary_earned, 25_000.0);
        assert_eq!(state.secondary_currency, 2.0);
        assert_eq!(state.secondary_earned_total, 2.0);
        assert!((state.prestige_bonus - 0.1).abs() < 1e-12);
        assert!(state.upgrades.values().all(|&level| level == 0));
        assert_eq!(state.global_multiplier, 1.0);
        assert_eq!(state.permanent_level(PermanentUpgradeId::GoldenRod), 1);
        assert!((state.permanent_bonus_factor - 1.1).abs() < 1e-12);
        assert!(state.unlocked_achievements.contains(&100));
    }

    #[test]
    fn test_second_prestige_needs_new_earnings() {
        let mut state = state_with_lifetime(25_000.0);
        perform_prestige(&mut state, &config());
        assert!(!can_prestige(&state, &config()));

        state.total_primary_earned += 5_000.0;
        assert_eq!(earnable_pearls(&state, &config()), 1.0);
    }

    #[test]
    fn test_spending_pearls_does_not_reopen_payout() {
        let mut state = state_with_lifetime(25_000.0);
        perform_prestige(&mut state, &config());
        state.secondary_currency = 0.0;
        assert_eq!(earnable_pearls(&state, &config()), 0.0);
        assert!(!can_prestige(&state, &config()));
    }
}
