//! Lifetime achievements and DPS milestones.
//!
//! Both are thresholds that unlock once and stay unlocked. Unlocked thresholds are
//! stored on the player state as plain numbers.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_milestone_def, milestone_name, ALL_ACHIEVEMENTS, ALL_DPS_MILESTONES};
pub use logic::{pending_achievements, pending_dps_milestones};
pub use types::{MilestoneDef, MilestoneKind};
