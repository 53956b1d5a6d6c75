//! Static upgrade catalog and the per-category formulas.
//!
//! Every formula here is a pure function of one definition and one level. Combining
//! upgrades happens in [`crate::progression::yields`].

use super::types::*;
use crate::core::constants::*;

/// All fish-priced upgrades in shop order.
pub static UPGRADES: [UpgradeDefinition; 4] = [
    UpgradeDefinition {
        id: UpgradeId::ClickPower,
        name: "Sturdy Rod",
        description: "+1 base fish per click",
        icon: "🎣",
        base_cost: CLICK_POWER_BASE_COST,
        growth_rate: COST_GROWTH_RATE,
        category: UpgradeCategory::ClickYield,
    },
    UpgradeDefinition {
        id: UpgradeId::AutoFishing,
        name: "Auto-Fishing Helper",
        description: "+1 fish every second",
        icon: "🤖",
        base_cost: AUTO_FISHING_BASE_COST,
        growth_rate: COST_GROWTH_RATE,
        category: UpgradeCategory::TickYield,
    },
    UpgradeDefinition {
        id: UpgradeId::LuckyFish,
        name: "Lucky Fish Treat",
        description: "Raises crit chance and the minimum crit multiplier",
        icon: "🍀",
        base_cost: LUCKY_FISH_BASE_COST,
        growth_rate: COST_GROWTH_RATE,
        category: UpgradeCategory::Crit {
            base_chance: CRIT_BASE_CHANCE,
            chance_per_level: CRIT_CHANCE_PER_LEVEL,
            min_multiplier: CRIT_MIN_MULTIPLIER,
            min_multiplier_step: CRIT_MIN_MULTIPLIER_STEP,
            max_multiplier: CRIT_MAX_MULTIPLIER,
        },
    },
    UpgradeDefinition {
        id: UpgradeId::CatCompanion,
        name: "Cat Companion",
        description: "+10% to all fish gains",
        icon: "🐱",
        base_cost: CAT_COMPANION_BASE_COST,
        growth_rate: COST_GROWTH_RATE,
        category: UpgradeCategory::GlobalMultiplier {
            per_level_bonus: GLOBAL_MULTIPLIER_PER_LEVEL,
        },
    },
];

/// All pearl-priced upgrades in shop order.
pub static PERMANENT_UPGRADES: [PermanentUpgradeDefinition; 3] = [
    PermanentUpgradeDefinition {
        id: PermanentUpgradeId::GoldenRod,
        name: "Golden Rod",
        description: "+10% permanent fish gains per level",
        icon: "✨",
        base_cost: GOLDEN_ROD_BASE_COST,
        growth_rate: PERMANENT_COST_GROWTH_RATE,
        kind: PermanentKind::Leveled {
            max_level: GOLDEN_ROD_MAX_LEVEL,
        },
        effect: PermanentEffect::YieldFactor(GOLDEN_ROD_FACTOR_PER_LEVEL),
    },
    PermanentUpgradeDefinition {
        id: PermanentUpgradeId::LuckyCharm,
        name: "Lucky Charm",
        description: "+2% permanent crit chance per level",
        icon: "🧿",
        base_cost: LUCKY_CHARM_BASE_COST,
        growth_rate: PERMANENT_COST_GROWTH_RATE,
        kind: PermanentKind::Leveled {
            max_level: LUCKY_CHARM_MAX_LEVEL,
        },
        effect: PermanentEffect::CritChance(LUCKY_CHARM_CRIT_PER_LEVEL),
    },
    PermanentUpgradeDefinition {
        id: PermanentUpgradeId::EternalNet,
        name: "Eternal Net",
        description: "+50% permanent fish gains",
        icon: "🕸️",
        base_cost: ETERNAL_NET_COST,
        growth_rate: PERMANENT_COST_GROWTH_RATE,
        kind: PermanentKind::OneShot,
        effect: PermanentEffect::YieldFactor(ETERNAL_NET_FACTOR),
    },
];

/// The upgrade whose level drives crit chance and magnitude.
pub const CRIT_SOURCE: UpgradeId = UpgradeId::LuckyFish;

impl UpgradeId {
    pub fn definition(&self) -> &'static UpgradeDefinition {
        match self {
            UpgradeId::ClickPower => &UPGRADES[0],
            UpgradeId::AutoFishing => &UPGRADES[1],
            UpgradeId::LuckyFish => &UPGRADES[2],
            UpgradeId::CatCompanion => &UPGRADES[3],
        }
    }
}

impl PermanentUpgradeId {
    pub fn definition(&self) -> &'static PermanentUpgradeDefinition {
        match self {
            PermanentUpgradeId::GoldenRod => &PERMANENT_UPGRADES[0],
            PermanentUpgradeId::LuckyCharm => &PERMANENT_UPGRADES[1],
            PermanentUpgradeId::EternalNet => &PERMANENT_UPGRADES[2],
        }
    }
}

/// Price of `base * growth^level`, floored to whole currency.
fn curve_cost(base_cost: f64, growth_rate: f64, level: u32) -> f64 {
    (base_cost * growth_rate.powf(f64::from(level))).floor()
}

impl UpgradeDefinition {
    /// Cost of buying the level after `level`.
    pub fn cost(&self, level: u32) -> f64 {
        curve_cost(self.base_cost, self.growth_rate, level)
    }

    /// Headline magnitude for display: bonus fish, crit chance or multiplier.
    pub fn effect(&self, level: u32) -> f64 {
        match self.category {
            UpgradeCategory::ClickYield | UpgradeCategory::TickYield => linear_effect(level),
            UpgradeCategory::Crit { .. } => self.crit_chance(level),
            UpgradeCategory::GlobalMultiplier { .. } => self.global_multiplier(level),
        }
    }

    /// `min(base + level * step, 1.0)`; zero for non-crit upgrades.
    pub fn crit_chance(&self, level: u32) -> f64 {
        match self.category {
            UpgradeCategory::Crit {
                base_chance,
                chance_per_level,
                ..
            } => (base_chance + level as f64 * chance_per_level).min(CRIT_CHANCE_CAP),
            _ => 0.0,
        }
    }

    /// Lower bound of the crit multiplier range; 1.0 for non-crit upgrades.
    pub fn min_crit_multiplier(&self, level: u32) -> f64 {
        match self.category {
            UpgradeCategory::Crit {
                min_multiplier,
                min_multiplier_step,
                max_multiplier,
                ..
            } => (min_multiplier + level as f64 * min_multiplier_step).min(max_multiplier),
            _ => 1.0,
        }
    }

    /// Upper bound of the crit multiplier range; 1.0 for non-crit upgrades.
    pub fn max_crit_multiplier(&self) -> f64 {
        match self.category {
            UpgradeCategory::Crit { max_multiplier, .. } => max_multiplier,
            _ => 1.0,
        }
    }

    /// Maps one uniform draw `r ∈ [0,1)` onto `[min(level), max]`.
    pub fn crit_multiplier(&self, level: u32, r: f64) -> f64 {
        let min = self.min_crit_multiplier(level);
        let max = self.max_crit_multiplier();
        min + r * (max - min)
    }

    /// `1 + level * bonus`; 1.0 for upgrades outside the global-multiplier category.
    pub fn global_multiplier(&self, level: u32) -> f64 {
        match self.category {
            UpgradeCategory::GlobalMultiplier { per_level_bonus } => {
                1.0 + level as f64 * per_level_bonus
            }
            _ => 1.0,
        }
    }
}

/// Click and tick boosts grant exactly their level.
pub fn linear_effect(level: u32) -> f64 {
    level as f64
}

impl PermanentUpgradeDefinition {
    /// Pearl price of the level after `level`, or `None` once maxed.
    pub fn cost(&self, level: u32) -> Option<f64> {
        if level >= self.kind.max_level() {
            return None;
        }
        Some(curve_cost(self.base_cost, self.growth_rate, level))
    }

    /// Contribution to the permanent yield factor at `level`.
    pub fn yield_factor_bonus(&self, level: u32) -> f64 {
        match self.effect {
            PermanentEffect::YieldFactor(per_level) => level as f64 * per_level,
            PermanentEffect::CritChance(_) => 0.0,
        }
    }

    /// Contribution to crit chance at `level`.
    pub fn crit_chance_bonus(&self, level: u32) -> f64 {
        match self.effect {
            PermanentEffect::CritChance(per_level) => level as f64 * per_level,
            PermanentEffect::YieldFactor(_) => 0.0,
        }
    }
}
