//! Upgrade identifiers and their static definitions.

use crate::core::error::ProgressionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upgrades bought with fish. Reset to level 0 on prestige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeId {
    ClickPower,
    AutoFishing,
    LuckyFish,
    CatCompanion,
}

impl UpgradeId {
    /// All upgrades in shop order.
    pub const ALL: [UpgradeId; 4] = [
        UpgradeId::ClickPower,
        UpgradeId::AutoFishing,
        UpgradeId::LuckyFish,
        UpgradeId::CatCompanion,
    ];

    /// Key used in save blobs.
    pub fn key(&self) -> &'static str {
        match self {
            UpgradeId::ClickPower => "clickPower",
            UpgradeId::AutoFishing => "autoFishing",
            UpgradeId::LuckyFish => "luckyFish",
            UpgradeId::CatCompanion => "catCompanion",
        }
    }
}

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UpgradeId {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpgradeId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| ProgressionError::UnknownUpgrade(s.to_string()))
    }
}

/// What an upgrade does, with the parameters its formula needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeCategory {
    /// Adds `level` to the base click yield.
    ClickYield,
    /// Adds `level` fish per tick.
    TickYield,
    /// Raises crit chance and the floor of the crit multiplier.
    Crit {
        base_chance: f64,
        chance_per_level: f64,
        min_multiplier: f64,
        min_multiplier_step: f64,
        max_multiplier: f64,
    },
    /// Multiplies every yield by `1 + level * per_level_bonus`.
    GlobalMultiplier { per_level_bonus: f64 },
}

/// Static definition of a fish-priced upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeDefinition {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub base_cost: f64,
    pub growth_rate: f64,
    pub category: UpgradeCategory,
}

/// Upgrades bought with pearls. Never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermanentUpgradeId {
    GoldenRod,
    LuckyCharm,
    EternalNet,
}

impl PermanentUpgradeId {
    pub const ALL: [PermanentUpgradeId; 3] = [
        PermanentUpgradeId::GoldenRod,
        PermanentUpgradeId::LuckyCharm,
        PermanentUpgradeId::EternalNet,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PermanentUpgradeId::GoldenRod => "goldenRod",
            PermanentUpgradeId::LuckyCharm => "luckyCharm",
            PermanentUpgradeId::EternalNet => "eternalNet",
        }
    }
}

impl fmt::Display for PermanentUpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PermanentUpgradeId {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PermanentUpgradeId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| ProgressionError::UnknownUpgrade(s.to_string()))
    }
}

/// Whether a permanent upgrade stacks or is bought once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermanentKind {
    Leveled { max_level: u32 },
    OneShot,
}

impl PermanentKind {
    pub fn max_level(&self) -> u32 {
        match self {
            PermanentKind::Leveled { max_level } => *max_level,
            PermanentKind::OneShot => 1,
        }
    }
}

/// Bonus a permanent upgrade contributes per level owned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PermanentEffect {
    /// Added to the permanent yield factor (which starts at 1.0).
    YieldFactor(f64),
    /// Added to crit chance before the cap.
    CritChance(f64),
}

/// Static definition of a pearl-priced upgrade.
#[derive(Debug, Clone)]
pub struct PermanentUpgradeDefinition {
    pub id: PermanentUpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub base_cost: f64,
    pub growth_rate: f64,
    pub kind: PermanentKind,
    pub effect: PermanentEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_keys_roundtrip_through_from_str() {
        for id in UpgradeId::ALL {
            assert_eq!(id.key().parse::<UpgradeId>().unwrap(), id);
        }
        for id in PermanentUpgradeId::ALL {
            assert_eq!(id.key().parse::<PermanentUpgradeId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_upgrade_is_an_error() {
        let err = "goldenHook".parse::<UpgradeId>().unwrap_err();
        assert_eq!(err, ProgressionError::UnknownUpgrade("goldenHook".to_string()));
    }

    #[test]
    fn test_serde_names_match_keys() {
        for id in UpgradeId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
        for id in PermanentUpgradeId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_one_shot_max_level_is_one() {
        assert_eq!(PermanentKind::OneShot.max_level(), 1);
        assert_eq!(PermanentKind::Leveled { max_level: 7 }.max_level(), 7);
    }
}
