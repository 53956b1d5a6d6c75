//! Cosmetic unlocks.
//!
//! Cosmetics never affect yield. Each item carries an [`UnlockRule`] over the player
//! state; the evaluator in [`logic`] reports which items became available.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{default_item, get_cosmetic, get_cosmetics_by_category, ALL_COSMETICS};
pub use logic::{pending_selection_fixes, pending_unlocks, CosmeticState};
pub use types::{CosmeticCategory, CosmeticItem, UnlockRule};
