//! Cosmetic categories, items and unlock rules.

use crate::core::error::ProgressionError;
use crate::core::player_state::PlayerState;
use crate::economy::UpgradeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slots the cat can be dressed in. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CosmeticCategory {
    Hat,
    Rod,
    Background,
}

impl CosmeticCategory {
    pub const ALL: [CosmeticCategory; 3] = [
        CosmeticCategory::Hat,
        CosmeticCategory::Rod,
        CosmeticCategory::Background,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CosmeticCategory::Hat => "hat",
            CosmeticCategory::Rod => "rod",
            CosmeticCategory::Background => "background",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CosmeticCategory::Hat => "Hat",
            CosmeticCategory::Rod => "Rod",
            CosmeticCategory::Background => "Background",
        }
    }
}

impl fmt::Display for CosmeticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CosmeticCategory {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CosmeticCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ProgressionError::UnknownCategory(s.to_string()))
    }
}

/// Condition under which a cosmetic becomes available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnlockRule {
    /// Always available; exactly one per category.
    Default,
    TotalEarnedAtLeast(f64),
    UpgradeLevelAtLeast(UpgradeId, u32),
    AchievementUnlocked(u64),
    SecondaryCurrencyAtLeast(f64),
    DpsMilestoneUnlocked(u64),
}

impl UnlockRule {
    pub fn is_met(&self, state: &PlayerState) -> bool {
        match *self {
            UnlockRule::Default => true,
            UnlockRule::TotalEarnedAtLeast(threshold) => state.total_primary_earned >= threshold,
            UnlockRule::UpgradeLevelAtLeast(id, level) => state.level(id) >= level,
            UnlockRule::AchievementUnlocked(threshold) => {
                state.unlocked_achievements.contains(&threshold)
            }
            UnlockRule::SecondaryCurrencyAtLeast(threshold) => {
                state.secondary_currency >= threshold
            }
            UnlockRule::DpsMilestoneUnlocked(threshold) => {
                state.unlocked_dps_milestones.contains(&threshold)
            }
        }
    }
}

/// Static definition of a cosmetic item.
#[derive(Debug, Clone)]
pub struct CosmeticItem {
    pub category: CosmeticCategory,
    pub id: &'static str,
    pub name: &'static str,
    pub rule: UnlockRule,
}
