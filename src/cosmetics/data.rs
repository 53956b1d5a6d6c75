//! Static cosmetic definitions.

use super::types::{CosmeticCategory, CosmeticItem, UnlockRule};
use crate::economy::UpgradeId;

/// All cosmetics, grouped by category. The first item of each category is its default.
pub const ALL_COSMETICS: &[CosmeticItem] = &[
    // Hats
    CosmeticItem {
        category: CosmeticCategory::Hat,
        id: "none",
        name: "Bare Head",
        rule: UnlockRule::Default,
    },
    CosmeticItem {
        category: CosmeticCategory::Hat,
        id: "strawHat",
        name: "Straw Hat",
        rule: UnlockRule::TotalEarnedAtLeast(1_000.0),
    },
    CosmeticItem {
        category: CosmeticCategory::Hat,
        id: "captainHat",
        name: "Captain's Hat",
        rule: UnlockRule::AchievementUnlocked(100_000),
    },
    CosmeticItem {
        category: CosmeticCategory::Hat,
        id: "crown",
        name: "Pearl Crown",
        rule: UnlockRule::SecondaryCurrencyAtLeast(10.0),
    },
    // Rods
    CosmeticItem {
        category: CosmeticCategory::Rod,
        id: "bamboo",
        name: "Bamboo Rod",
        rule: UnlockRule::Default,
    },
    CosmeticItem {
        category: CosmeticCategory::Rod,
        id: "carbon",
        name: "Carbon Rod",
        rule: UnlockRule::UpgradeLevelAtLeast(UpgradeId::ClickPower, 10),
    },
    CosmeticItem {
        category: CosmeticCategory::Rod,
        id: "golden",
        name: "Golden Rod",
        rule: UnlockRule::DpsMilestoneUnlocked(100),
    },
    // Backgrounds
    CosmeticItem {
        category: CosmeticCategory::Background,
        id: "pond",
        name: "Quiet Pond",
        rule: UnlockRule::Default,
    },
    CosmeticItem {
        category: CosmeticCategory::Background,
        id: "river",
        name: "Rushing River",
        rule: UnlockRule::TotalEarnedAtLeast(10_000.0),
    },
    CosmeticItem {
        category: CosmeticCategory::Background,
        id: "ocean",
        name: "Open Ocean",
        rule: UnlockRule::SecondaryCurrencyAtLeast(1.0),
    },
    CosmeticItem {
        category: CosmeticCategory::Background,
        id: "starlit",
        name: "Starlit Bay",
        rule: UnlockRule::DpsMilestoneUnlocked(1_000),
    },
];

/// Look up a cosmetic by category and id.
pub fn get_cosmetic(category: CosmeticCategory, id: &str) -> Option<&'static CosmeticItem> {
    ALL_COSMETICS
        .iter()
        .find(|item| item.category == category && item.id == id)
}

/// All cosmetics of one category in display order.
pub fn get_cosmetics_by_category(
    category: CosmeticCategory,
) -> impl Iterator<Item = &'static CosmeticItem> {
    ALL_COSMETICS
        .iter()
        .filter(move |item| item.category == category)
}

/// The item a category falls back to when nothing valid is selected.
pub fn default_item(category: CosmeticCategory) -> &'static str {
    match category {
        CosmeticCategory::Hat => "none",
        CosmeticCategory::Rod => "bamboo",
        CosmeticCategory::Background => "pond",
    }
}
