//! Yield, crit and prestige rules plus the controller that applies them.

pub mod controller;
pub mod crit;
pub mod events;
pub mod prestige;
pub mod yields;

pub use controller::{AdvanceReport, ProgressionController, Snapshot};
pub use crit::{resolve_click, resolve_tick, YieldRoll};
pub use events::{
    EventOutcome, EventQueue, InputEvent, PrestigeOutcome, ProgressEvent, PurchaseOutcome,
    YieldResult,
};
pub use prestige::{can_prestige, earnable_pearls, preview, PrestigePreview};
