//! Static milestone definitions for the default thresholds.

use super::types::{MilestoneDef, MilestoneKind};

/// Names for the default lifetime-earnings thresholds, ascending.
pub const ALL_ACHIEVEMENTS: &[MilestoneDef] = &[
    MilestoneDef {
        kind: MilestoneKind::Lifetime,
        threshold: 100,
        name: "First Bucket",
        icon: "🐟",
    },
    MilestoneDef {
        kind: MilestoneKind::Lifetime,
        threshold: 1_000,
        name: "Fishmonger",
        icon: "🐠",
    },
    MilestoneDef {
        kind: MilestoneKind::Lifetime,
        threshold: 10_000,
        name: "Harbor Legend",
        icon: "🐡",
    },
    MilestoneDef {
        kind: MilestoneKind::Lifetime,
        threshold: 100_000,
        name: "Ocean Baron",
        icon: "🦈",
    },
    MilestoneDef {
        kind: MilestoneKind::Lifetime,
        threshold: 1_000_000,
        name: "Cat of the Seven Seas",
        icon: "🐋",
    },
];

/// Names for the default fish-per-second thresholds, ascending.
pub const ALL_DPS_MILESTONES: &[MilestoneDef] = &[
    MilestoneDef {
        kind: MilestoneKind::Dps,
        threshold: 10,
        name: "Steady Trickle",
        icon: "💧",
    },
    MilestoneDef {
        kind: MilestoneKind::Dps,
        threshold: 50,
        name: "Busy Docks",
        icon: "⚓",
    },
    MilestoneDef {
        kind: MilestoneKind::Dps,
        threshold: 100,
        name: "Fish Factory",
        icon: "🏭",
    },
    MilestoneDef {
        kind: MilestoneKind::Dps,
        threshold: 500,
        name: "Tidal Wave",
        icon: "🌊",
    },
    MilestoneDef {
        kind: MilestoneKind::Dps,
        threshold: 1_000,
        name: "Endless Shoal",
        icon: "🌌",
    },
];

/// Definition for a threshold, if it is one of the defaults.
pub fn get_milestone_def(kind: MilestoneKind, threshold: u64) -> Option<&'static MilestoneDef> {
    let table = match kind {
        MilestoneKind::Lifetime => ALL_ACHIEVEMENTS,
        MilestoneKind::Dps => ALL_DPS_MILESTONES,
    };
    table.iter().find(|def| def.threshold == threshold)
}

/// Display name for any threshold, including ones configured at runtime.
pub fn milestone_name(kind: MilestoneKind, threshold: u64) -> String {
    match get_milestone_def(kind, threshold) {
        Some(def) => def.name.to_string(),
        None => format!("{} {}", kind.name(), threshold),
    }
}
