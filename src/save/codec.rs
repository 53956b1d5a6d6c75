//! JSON save format.
//!
//! Encoding writes the current schema (version 2). Decoding is lenient field by
//! field: a value that is present and well-typed is used, anything else falls back
//! to that field's default with a warning. Blobs without a `version` are treated as
//! version 1 and their legacy keys are migrated.

use crate::core::config::GameConfig;
use crate::core::constants::{LEGACY_SAVE_VERSION, MAX_UPGRADE_LEVEL, SAVE_VERSION};
use crate::core::error::StoreError;
use crate::core::player_state::PlayerState;
use crate::cosmetics::{get_cosmetic, CosmeticCategory};
use crate::economy::{PermanentKind, PermanentUpgradeId, UpgradeId};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveBlob<'a> {
    version: u32,
    saved_at: String,
    primary_currency: f64,
    total_primary_earned: f64,
    secondary_currency: f64,
    secondary_earned_total: f64,
    upgrades: BTreeMap<&'static str, LevelEntry>,
    permanent_upgrades: BTreeMap<&'static str, PermanentEntry>,
    unlocked_achievements: &'a BTreeSet<u64>,
    unlocked_dps_milestones: &'a BTreeSet<u64>,
    cosmetics: CosmeticsBlob<'a>,
    muted: bool,
}

#[derive(Serialize)]
struct LevelEntry {
    level: u32,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PermanentEntry {
    Leveled { level: u32 },
    OneShot { purchased: bool },
}

#[derive(Serialize)]
struct CosmeticsBlob<'a> {
    selected: BTreeMap<&'static str, &'a str>,
    unlocked: BTreeMap<&'static str, &'a BTreeSet<String>>,
}

/// Serialize the state as a version 2 blob stamped with the current time.
pub fn encode(state: &PlayerState) -> Result<String, StoreError> {
    let blob = SaveBlob {
        version: SAVE_VERSION,
        saved_at: chrono::Utc::now().to_rfc3339(),
        primary_currency: state.primary_currency,
        total_primary_earned: state.total_primary_earned,
        secondary_currency: state.secondary_currency,
        secondary_earned_total: state.secondary_earned_total,
        upgrades: state
            .upgrades
            .iter()
            .map(|(id, &level)| (id.key(), LevelEntry { level }))
            .collect(),
        permanent_upgrades: state
            .permanent_upgrades
            .iter()
            .map(|(id, &level)| {
                let entry = match id.definition().kind {
                    PermanentKind::Leveled { .. } => PermanentEntry::Leveled { level },
                    PermanentKind::OneShot => PermanentEntry::OneShot {
                        purchased: level > 0,
                    },
                };
                (id.key(), entry)
            })
            .collect(),
        unlocked_achievements: &state.unlocked_achievements,
        unlocked_dps_milestones: &state.unlocked_dps_milestones,
        cosmetics: CosmeticsBlob {
            selected: state
                .cosmetics
                .selected
                .iter()
                .map(|(category, item)| (category.key(), item.as_str()))
                .collect(),
            unlocked: state
                .cosmetics
                .unlocked
                .iter()
                .map(|(category, items)| (category.key(), items))
                .collect(),
        },
        muted: state.muted,
    };
    Ok(serde_json::to_string(&blob)?)
}

/// Decode with the default balance config.
pub fn decode(blob: &str) -> PlayerState {
    decode_with(blob, &GameConfig::default())
}

/// Decode a blob into a valid state. Never fails: unreadable input yields the
/// default state.
pub fn decode_with(blob: &str, config: &GameConfig) -> PlayerState {
    if blob.trim().is_empty() {
        return PlayerState::default();
    }

    let root = match serde_json::from_str::<Value>(blob) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            log::warn!("Save blob is not an object ({}), starting fresh", kind_of(&other));
            return PlayerState::default();
        }
        Err(e) => {
            log::warn!("Save blob is not valid JSON ({}), starting fresh", e);
            return PlayerState::default();
        }
    };

    let version = read_version(&root);
    if version == u64::from(LEGACY_SAVE_VERSION) && !root.is_empty() {
        log::warn!("Migrating version {} save", LEGACY_SAVE_VERSION);
    } else if version > u64::from(SAVE_VERSION) {
        log::warn!(
            "Save version {} is newer than supported version {}, reading known fields",
            version,
            SAVE_VERSION
        );
    }

    let mut state = PlayerState {
        primary_currency: read_currency(&root, &["primaryCurrency", "fish"]),
        total_primary_earned: read_currency(&root, &["totalPrimaryEarned", "totalFishEarned"]),
        secondary_currency: read_currency(&root, &["secondaryCurrency", "prestigeLevel"]),
        ..PlayerState::default()
    };

    state.secondary_earned_total = if root.contains_key("secondaryEarnedTotal") {
        read_currency(&root, &["secondaryEarnedTotal"])
    } else {
        state.secondary_currency
    };

    // Legacy lifetime fish restarted at every prestige
    if !root.contains_key("totalPrimaryEarned") && root.contains_key("totalFishEarned") {
        state.total_primary_earned += state.secondary_earned_total * config.prestige_requirement;
    }

    if state.total_primary_earned < state.primary_currency {
        log::warn!(
            "Lifetime fish {} below fish on hand {}, raising it",
            state.total_primary_earned,
            state.primary_currency
        );
        state.total_primary_earned = state.primary_currency;
    }
    if state.secondary_earned_total < state.secondary_currency {
        log::warn!(
            "Lifetime pearls {} below pearls on hand {}, raising it",
            state.secondary_earned_total,
            state.secondary_currency
        );
        state.secondary_earned_total = state.secondary_currency;
    }

    if let Some(value) = root.get("upgrades") {
        read_upgrades(value, &mut state);
    }
    if let Some(value) = root.get("permanentUpgrades") {
        read_permanent_upgrades(value, &mut state);
    }
    if let Some(value) = root.get("unlockedAchievements") {
        state.unlocked_achievements = read_threshold_set(value, "unlockedAchievements");
    }
    if let Some(value) = root.get("unlockedDpsMilestones") {
        state.unlocked_dps_milestones = read_threshold_set(value, "unlockedDpsMilestones");
    }
    if let Some(value) = root.get("cosmetics") {
        read_cosmetics(value, &mut state);
    }
    state.muted = match root.get("muted") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(muted)) => *muted,
        Some(other) => {
            log::warn!("muted is {}, expected a bool", kind_of(other));
            false
        }
    };

    state.cosmetics.ensure_defaults();
    state.refresh_derived(config);
    state
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn read_version(root: &Map<String, Value>) -> u64 {
    match root.get("version") {
        None => u64::from(LEGACY_SAVE_VERSION),
        Some(value) => value.as_u64().unwrap_or_else(|| {
            log::warn!("version is {}, assuming {}", kind_of(value), LEGACY_SAVE_VERSION);
            u64::from(LEGACY_SAVE_VERSION)
        }),
    }
}

/// First present key wins. Negative, non-finite or mistyped values read as zero.
fn read_currency(root: &Map<String, Value>, keys: &[&str]) -> f64 {
    let Some((key, value)) = keys
        .iter()
        .find_map(|key| root.get(*key).map(|value| (*key, value)))
    else {
        return 0.0;
    };
    match value.as_f64() {
        Some(amount) if amount.is_finite() && amount >= 0.0 => {
            if amount.fract() != 0.0 {
                log::warn!("{} is {}, rounding down", key, amount);
            }
            amount.floor()
        }
        Some(amount) => {
            log::warn!("{} is {}, resetting to 0", key, amount);
            0.0
        }
        None if value.is_null() => 0.0,
        None => {
            log::warn!("{} is {}, expected a number", key, kind_of(value));
            0.0
        }
    }
}

/// Accepts `{ "level": n }` or a bare `n`. Levels must be whole and non-negative.
fn read_level(value: &Value) -> Option<u32> {
    let raw = match value {
        Value::Object(entry) => entry.get("level")?,
        other => other,
    };
    if let Some(level) = raw.as_u64() {
        return Some(u32::try_from(level).unwrap_or(u32::MAX));
    }
    raw.as_f64()
        .filter(|level| level.is_finite() && *level >= 0.0 && level.fract() == 0.0)
        .map(|level| level.min(u32::MAX as f64) as u32)
}

fn read_upgrades(value: &Value, state: &mut PlayerState) {
    let Value::Object(entries) = value else {
        log::warn!("upgrades is {}, expected an object", kind_of(value));
        return;
    };
    for (key, entry) in entries {
        let Ok(id) = key.parse::<UpgradeId>() else {
            log::warn!("Dropping unknown upgrade `{}`", key);
            continue;
        };
        match read_level(entry) {
            Some(level) if level > MAX_UPGRADE_LEVEL => {
                log::warn!(
                    "Upgrade `{}` level {} above cap {}, clamping",
                    key,
                    level,
                    MAX_UPGRADE_LEVEL
                );
                state.upgrades.insert(id, MAX_UPGRADE_LEVEL);
            }
            Some(level) => {
                state.upgrades.insert(id, level);
            }
            None => log::warn!("Upgrade `{}` has no valid level, resetting to 0", key),
        }
    }
}

fn read_permanent_upgrades(value: &Value, state: &mut PlayerState) {
    let Value::Object(entries) = value else {
        log::warn!("permanentUpgrades is {}, expected an object", kind_of(value));
        return;
    };
    for (key, entry) in entries {
        let Ok(id) = key.parse::<PermanentUpgradeId>() else {
            log::warn!("Dropping unknown permanent upgrade `{}`", key);
            continue;
        };
        let purchased = entry
            .as_object()
            .and_then(|fields| fields.get("purchased"))
            .and_then(Value::as_bool);
        let level = match (purchased, read_level(entry)) {
            (Some(purchased), _) => u32::from(purchased),
            (None, Some(level)) => level,
            (None, None) => {
                log::warn!("Permanent upgrade `{}` is unreadable, resetting", key);
                continue;
            }
        };
        let max_level = id.definition().kind.max_level();
        if level > max_level {
            log::warn!(
                "Permanent upgrade `{}` level {} above cap {}, clamping",
                key,
                level,
                max_level
            );
        }
        state.permanent_upgrades.insert(id, level.min(max_level));
    }
}

fn read_threshold_set(value: &Value, field: &str) -> BTreeSet<u64> {
    let Value::Array(items) = value else {
        log::warn!("{} is {}, expected an array", field, kind_of(value));
        return BTreeSet::new();
    };
    let mut set = BTreeSet::new();
    for item in items {
        match item.as_u64().or_else(|| {
            item.as_f64()
                .filter(|t| t.is_finite() && *t >= 0.0 && t.fract() == 0.0)
                .map(|t| t as u64)
        }) {
            Some(threshold) => {
                if !set.insert(threshold) {
                    log::warn!("{} lists {} twice", field, threshold);
                }
            }
            None => log::warn!("Dropping non-integer entry in {}", field),
        }
    }
    set
}

fn read_cosmetics(value: &Value, state: &mut PlayerState) {
    let Value::Object(fields) = value else {
        log::warn!("cosmetics is {}, expected an object", kind_of(value));
        return;
    };

    if let Some(Value::Object(unlocked)) = fields.get("unlocked") {
        for (category_key, items) in unlocked {
            let Ok(category) = category_key.parse::<CosmeticCategory>() else {
                log::warn!("Dropping unknown cosmetic category `{}`", category_key);
                continue;
            };
            let Value::Array(items) = items else {
                log::warn!("Unlocked {} cosmetics are not a list", category);
                continue;
            };
            for item in items {
                match item.as_str() {
                    Some(id) if get_cosmetic(category, id).is_some() => {
                        state.cosmetics.unlock(category, id);
                    }
                    _ => log::warn!("Dropping unknown {} cosmetic {}", category, item),
                }
            }
        }
    }

    if let Some(Value::Object(selected)) = fields.get("selected") {
        for (category_key, item) in selected {
            let Ok(category) = category_key.parse::<CosmeticCategory>() else {
                log::warn!("Dropping selection for unknown category `{}`", category_key);
                continue;
            };
            match item.as_str() {
                Some(id) if state.cosmetics.is_unlocked(category, id) => {
                    state.cosmetics.selected.insert(category, id.to_string());
                }
                _ => log::warn!("Selected {} cosmetic {} is not owned, using default", category, item),
            }
        }
    }
}
