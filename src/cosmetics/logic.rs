//! Cosmetic ownership and the unlock evaluator.

use super::data::{default_item, get_cosmetic, ALL_COSMETICS};
use super::types::CosmeticCategory;
use crate::core::player_state::PlayerState;
use std::collections::{BTreeMap, BTreeSet};

/// Unlocked cosmetics and the current pick per category.
#[derive(Debug, Clone, PartialEq)]
pub struct CosmeticState {
    pub selected: BTreeMap<CosmeticCategory, String>,
    pub unlocked: BTreeMap<CosmeticCategory, BTreeSet<String>>,
}

impl Default for CosmeticState {
    fn default() -> Self {
        let mut state = CosmeticState {
            selected: BTreeMap::new(),
            unlocked: BTreeMap::new(),
        };
        state.ensure_defaults();
        state
    }
}

impl CosmeticState {
    pub fn is_unlocked(&self, category: CosmeticCategory, item: &str) -> bool {
        self.unlocked
            .get(&category)
            .is_some_and(|items| items.contains(item))
    }

    /// Selected item, or the category default if nothing valid is selected.
    pub fn selected_or_default(&self, category: CosmeticCategory) -> &str {
        match self.selected.get(&category) {
            Some(item) if self.is_unlocked(category, item) => item.as_str(),
            _ => default_item(category),
        }
    }

    /// Adds an item to the unlocked set. Returns true if it was newly unlocked.
    pub fn unlock(&mut self, category: CosmeticCategory, item: &str) -> bool {
        self.unlocked
            .entry(category)
            .or_default()
            .insert(item.to_string())
    }

    /// Default items are always owned and every category has a valid selection.
    pub fn ensure_defaults(&mut self) {
        for category in CosmeticCategory::ALL {
            self.unlock(category, default_item(category));
            let valid = self
                .selected
                .get(&category)
                .is_some_and(|item| self.is_unlocked(category, item));
            if !valid {
                self.selected
                    .insert(category, default_item(category).to_string());
            }
        }
    }

    /// Number of unlocked items in a category.
    pub fn unlocked_count(&self, category: CosmeticCategory) -> usize {
        self.unlocked.get(&category).map_or(0, |items| items.len())
    }
}

/// Items whose rule now holds but which are not yet owned, in catalog order.
pub fn pending_unlocks(state: &PlayerState) -> Vec<(CosmeticCategory, &'static str)> {
    ALL_COSMETICS
        .iter()
        .filter(|item| !state.cosmetics.is_unlocked(item.category, item.id))
        .filter(|item| item.rule.is_met(state))
        .map(|item| (item.category, item.id))
        .collect()
}

/// Categories whose selection is missing or points at an item that is not owned,
/// paired with the default they should fall back to.
pub fn pending_selection_fixes(state: &PlayerState) -> Vec<(CosmeticCategory, &'static str)> {
    CosmeticCategory::ALL
        .into_iter()
        .filter(|category| {
            !state
                .cosmetics
                .selected
                .get(category)
                .is_some_and(|item| {
                    state.cosmetics.is_unlocked(*category, item)
                        && get_cosmetic(*category, item).is_some()
                })
        })
        .map(|category| (category, default_item(category)))
        .collect()
}
