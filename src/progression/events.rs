//! Inputs the controller accepts and the events and outcomes it reports back.

use super::crit::YieldRoll;
use super::prestige::PrestigePreview;
use crate::core::error::ProgressionError;
use crate::cosmetics::CosmeticCategory;
use crate::economy::{PermanentUpgradeId, UpgradeId};
use std::collections::VecDeque;

/// Something that unlocked or changed as a side effect of a transition.
///
/// The presentation layer maps these to toasts, sounds and animations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    AchievementUnlocked { threshold: u64 },
    DpsMilestoneUnlocked { threshold: u64 },
    CosmeticUnlocked {
        category: CosmeticCategory,
        item: &'static str,
    },
    /// The selected cosmetic was not owned and fell back to the default.
    SelectionReset {
        category: CosmeticCategory,
        item: &'static str,
    },
    /// First tick-yield level bought; the host should start ticking.
    PassiveYieldStarted,
    /// Prestige cleared the tick-yield upgrade; the host should stop ticking.
    PassiveYieldStopped,
}

/// Result of a click or tick.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldResult {
    pub roll: YieldRoll,
    pub events: Vec<ProgressEvent>,
}

impl YieldResult {
    pub fn amount(&self) -> f64 {
        self.roll.amount
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    Purchased {
        cost: f64,
        new_level: u32,
        events: Vec<ProgressEvent>,
    },
    /// Nothing changed.
    InsufficientFunds { cost: f64, available: f64 },
    /// Upgrade at its level cap, or a one-shot upgrade already owned.
    MaxedOut,
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrestigeOutcome {
    Committed {
        earned: f64,
        events: Vec<ProgressEvent>,
    },
    /// Nothing changed; the preview explains why.
    Rejected { preview: PrestigePreview },
}

/// One player or scheduler input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Click,
    Tick,
    Purchase(UpgradeId),
    PurchasePermanent(PermanentUpgradeId),
    PreviewPrestige,
    CommitPrestige,
    ToggleMute,
    SelectCosmetic(CosmeticCategory, String),
}

/// What handling one [`InputEvent`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Yield(YieldResult),
    Purchase(PurchaseOutcome),
    Preview(PrestigePreview),
    Prestige(PrestigeOutcome),
    Muted(bool),
    CosmeticSelected(Result<(), ProgressionError>),
}

/// FIFO buffer of inputs. Events are never merged or reordered.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
