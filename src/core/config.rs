//! Tunable balance configuration.
//!
//! `GameConfig::default()` mirrors [`crate::core::constants`]; hosts can override
//! any subset of fields from a JSON document.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Balance knobs the controller and evaluators read at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Lifetime fish needed per pearl, and the floor for any prestige.
    pub prestige_requirement: f64,
    /// Yield bonus granted by each pearl currently held.
    pub prestige_bonus_per_pearl: f64,
    pub tick_interval_ms: u64,
    pub autosave_interval_ms: u64,
    /// Lifetime-earnings thresholds, ascending.
    pub achievement_thresholds: Vec<u64>,
    /// Fish-per-second thresholds, ascending.
    pub dps_milestone_thresholds: Vec<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prestige_requirement: PRESTIGE_REQUIREMENT,
            prestige_bonus_per_pearl: PRESTIGE_BONUS_PER_PEARL,
            tick_interval_ms: TICK_INTERVAL_MS,
            autosave_interval_ms: AUTOSAVE_INTERVAL_MS,
            achievement_thresholds: ACHIEVEMENT_THRESHOLDS.to_vec(),
            dps_milestone_thresholds: DPS_MILESTONE_THRESHOLDS.to_vec(),
        }
    }
}

impl GameConfig {
    /// Parse overrides from JSON. Missing keys keep their defaults; a document that
    /// does not parse at all yields the full default config.
    pub fn from_json_str(json: &str) -> Self {
        let mut config = match serde_json::from_str::<GameConfig>(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unreadable balance config: {}", e);
                return Self::default();
            }
        };
        config.normalize();
        config
    }

    /// Keeps the values inside the ranges the formulas assume.
    fn normalize(&mut self) {
        let defaults = Self::default();
        if !(self.prestige_requirement.is_finite() && self.prestige_requirement >= 1.0) {
            log::warn!(
                "prestigeRequirement {} out of range, using {}",
                self.prestige_requirement,
                defaults.prestige_requirement
            );
            self.prestige_requirement = defaults.prestige_requirement;
        }
        if !(self.prestige_bonus_per_pearl.is_finite() && self.prestige_bonus_per_pearl >= 0.0) {
            self.prestige_bonus_per_pearl = defaults.prestige_bonus_per_pearl;
        }
        if self.tick_interval_ms == 0 {
            self.tick_interval_ms = defaults.tick_interval_ms;
        }
        if self.autosave_interval_ms == 0 {
            self.autosave_interval_ms = defaults.autosave_interval_ms;
        }
        self.achievement_thresholds.sort_unstable();
        self.achievement_thresholds.dedup();
        self.dps_milestone_thresholds.sort_unstable();
        self.dps_milestone_thresholds.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.prestige_requirement, 10_000.0);
        assert_eq!(config.prestige_bonus_per_pearl, 0.05);
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.autosave_interval_ms, 10_000);
        assert_eq!(config.achievement_thresholds.len(), 5);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = GameConfig::from_json_str(r#"{"prestigeRequirement": 500}"#);
        assert_eq!(config.prestige_requirement, 500.0);
        assert_eq!(config.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        assert_eq!(GameConfig::from_json_str("not json"), GameConfig::default());
    }

    #[test]
    fn test_thresholds_sorted_and_deduped() {
        let config = GameConfig::from_json_str(r#"{"achievementThresholds": [50, 5, 50, 1]}"#);
        assert_eq!(config.achievement_thresholds, vec![1, 5, 50]);
    }

    #[test]
    fn test_invalid_requirement_rejected() {
        let config = GameConfig::from_json_str(r#"{"prestigeRequirement": 0}"#);
        assert_eq!(config.prestige_requirement, PRESTIGE_REQUIREMENT);
    }
}
