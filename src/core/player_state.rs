use crate::core::config::GameConfig;
use crate::cosmetics::CosmeticState;
use crate::economy::{PermanentUpgradeId, UpgradeId};
use crate::progression::yields;
use std::collections::{BTreeMap, BTreeSet};

/// All player progress. Owned by a single `ProgressionController`.
///
/// `global_multiplier`, `prestige_bonus` and `permanent_bonus_factor` are derived
/// caches; [`PlayerState::refresh_derived`] recomputes them from the stored facts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Spendable fish. Reset on prestige.
    pub primary_currency: f64,
    /// Every fish ever earned. Only ever increases; survives prestige.
    pub total_primary_earned: f64,
    /// Pearls on hand. Granted by prestige, spent on permanent upgrades.
    pub secondary_currency: f64,
    /// Every pearl ever granted; prestige payouts are measured against this.
    pub secondary_earned_total: f64,
    /// Product of the global-multiplier upgrades.
    pub global_multiplier: f64,
    /// `secondary_currency * bonus_per_pearl`.
    pub prestige_bonus: f64,
    /// `1 + Σ` permanent yield-factor bonuses.
    pub permanent_bonus_factor: f64,
    pub upgrades: BTreeMap<UpgradeId, u32>,
    pub permanent_upgrades: BTreeMap<PermanentUpgradeId, u32>,
    pub unlocked_achievements: BTreeSet<u64>,
    pub unlocked_dps_milestones: BTreeSet<u64>,
    pub cosmetics: CosmeticState,
    pub muted: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            primary_currency: 0.0,
            total_primary_earned: 0.0,
            secondary_currency: 0.0,
            secondary_earned_total: 0.0,
            global_multiplier: 1.0,
            prestige_bonus: 0.0,
            permanent_bonus_factor: 1.0,
            upgrades: UpgradeId::ALL.into_iter().map(|id| (id, 0)).collect(),
            permanent_upgrades: PermanentUpgradeId::ALL
                .into_iter()
                .map(|id| (id, 0))
                .collect(),
            unlocked_achievements: BTreeSet::new(),
            unlocked_dps_milestones: BTreeSet::new(),
            cosmetics: CosmeticState::default(),
            muted: false,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a fish-priced upgrade (0 if never bought).
    pub fn level(&self, id: UpgradeId) -> u32 {
        *self.upgrades.get(&id).unwrap_or(&0)
    }

    /// Level of a pearl-priced upgrade (0/1 for one-shot upgrades).
    pub fn permanent_level(&self, id: PermanentUpgradeId) -> u32 {
        *self.permanent_upgrades.get(&id).unwrap_or(&0)
    }

    /// Recompute every cached multiplier from levels and pearls.
    pub fn refresh_derived(&mut self, config: &GameConfig) {
        self.global_multiplier = yields::global_multiplier(self);
        self.prestige_bonus = yields::prestige_bonus(self, config);
        self.permanent_bonus_factor = yields::permanent_bonus_factor(self);
    }

    /// Credit whole fish to both the wallet and the lifetime counter.
    pub(crate) fn credit_primary(&mut self, amount: f64) {
        let amount = non_negative(amount, "credited fish");
        self.primary_currency += amount;
        self.total_primary_earned += amount;
    }

    /// Spend fish. Callers check affordability first.
    pub(crate) fn debit_primary(&mut self, amount: f64) {
        self.primary_currency = non_negative(self.primary_currency - amount, "fish balance");
    }

    /// Spend pearls. Callers check affordability first.
    pub(crate) fn debit_secondary(&mut self, amount: f64) {
        self.secondary_currency = non_negative(self.secondary_currency - amount, "pearl balance");
    }
}

/// Currency can never go negative. Trips in debug builds, clamps in release.
pub(crate) fn non_negative(value: f64, what: &str) -> f64 {
    debug_assert!(value >= 0.0, "{} went negative: {}", what, value);
    if value >= 0.0 {
        value
    } else {
        log::error!("{} went negative ({}), clamping to zero", what, value);
        0.0
    }
}
