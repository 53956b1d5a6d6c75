//! Progression and persistence engine for an idle cat-fishing game.
//!
//! The player earns fish by clicking and by passive ticks, buys upgrades with
//! exponentially rising prices, and prestiges to convert lifetime earnings into
//! pearls. Achievements, DPS milestones and cosmetics unlock from thresholds over
//! the same state. Everything is driven through [`ProgressionController`]; the
//! [`save`] module turns the state into a versioned JSON blob and back.

pub mod achievements;
pub mod core;
pub mod cosmetics;
pub mod economy;
pub mod progression;
pub mod save;
pub mod simulator;

pub use crate::core::config::GameConfig;
pub use crate::core::error::{ProgressionError, StoreError};
pub use crate::core::game_loop::{Cadence, CadenceStep};
pub use crate::core::player_state::PlayerState;
pub use crate::cosmetics::CosmeticCategory;
pub use crate::economy::{PermanentUpgradeId, UpgradeId};
pub use crate::progression::{
    AdvanceReport, EventOutcome, EventQueue, InputEvent, PrestigeOutcome, PrestigePreview,
    ProgressEvent, ProgressionController, PurchaseOutcome, Snapshot, YieldResult,
};
pub use crate::save::{BlobStore, FileStore, MemoryStore};
