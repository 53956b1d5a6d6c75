//! The only owner of `PlayerState`. Every mutation goes through here.
//!
//! Each transition finishes mutating the state before the milestone and cosmetic
//! evaluators look at it; their pending unlocks are then applied and reported as
//! [`ProgressEvent`]s.

use super::crit::{resolve_click, resolve_tick};
use super::events::{
    EventOutcome, EventQueue, InputEvent, ProgressEvent, PrestigeOutcome, PurchaseOutcome,
    YieldResult,
};
use super::prestige::{self, PrestigePreview};
use super::yields;
use crate::achievements::{pending_achievements, pending_dps_milestones};
use crate::core::config::GameConfig;
use crate::core::constants::MAX_UPGRADE_LEVEL;
use crate::core::error::{ProgressionError, StoreError};
use crate::core::game_loop::Cadence;
use crate::core::player_state::PlayerState;
use crate::cosmetics::{get_cosmetic, pending_selection_fixes, pending_unlocks, CosmeticCategory};
use crate::economy::{PermanentUpgradeId, UpgradeId};
use crate::save::{self, BlobStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Read-only view for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub state: &'a PlayerState,
    /// Fish per click before crit, unfloored.
    pub click_yield: f64,
    /// Fish per tick, unfloored.
    pub tick_yield: f64,
    pub crit_chance: f64,
    /// Price of the next level of each upgrade.
    pub upgrade_costs: BTreeMap<UpgradeId, f64>,
    /// Pearl price of the next level, `None` once maxed.
    pub permanent_costs: BTreeMap<PermanentUpgradeId, Option<f64>>,
    pub prestige: PrestigePreview,
    pub passive_active: bool,
}

/// What one `advance` call did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvanceReport {
    pub ticks: u64,
    pub fish_earned: f64,
    pub events: Vec<ProgressEvent>,
    /// A save was due and written successfully.
    pub saved: bool,
}

pub struct ProgressionController<R = StdRng> {
    state: PlayerState,
    config: GameConfig,
    rng: R,
    cadence: Cadence,
}

impl ProgressionController<StdRng> {
    /// Fresh game with an entropy-seeded RNG.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(PlayerState::default(), config, StdRng::from_entropy())
    }

    /// Resume from whatever the store holds, or start fresh.
    pub fn load(store: &dyn BlobStore, config: GameConfig) -> Self {
        let state = save::load_state(store, &config);
        Self::with_rng(state, config, StdRng::from_entropy())
    }
}

impl<R: Rng> ProgressionController<R> {
    /// Wrap an existing state. Derived fields are recomputed and any unlocks the
    /// state already qualifies for are applied silently.
    pub fn with_rng(state: PlayerState, config: GameConfig, rng: R) -> Self {
        let cadence = Cadence::new(&config);
        let mut controller = Self {
            state,
            config,
            rng,
            cadence,
        };
        controller.state.refresh_derived(&controller.config);
        controller.run_evaluators();
        controller
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn into_state(self) -> PlayerState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let state = &self.state;
        Snapshot {
            state,
            click_yield: yields::actual_click_yield(state),
            tick_yield: yields::actual_tick_yield(state),
            crit_chance: yields::total_crit_chance(state),
            upgrade_costs: UpgradeId::ALL
                .into_iter()
                .map(|id| (id, id.definition().cost(state.level(id))))
                .collect(),
            permanent_costs: PermanentUpgradeId::ALL
                .into_iter()
                .map(|id| (id, id.definition().cost(state.permanent_level(id))))
                .collect(),
            prestige: prestige::preview(state, &self.config),
            passive_active: yields::passive_yield_active(state),
        }
    }

    pub fn passive_yield_active(&self) -> bool {
        yields::passive_yield_active(&self.state)
    }

    pub fn apply_click(&mut self) -> YieldResult {
        let roll = resolve_click(&self.state, &mut self.rng);
        self.state.credit_primary(roll.amount);
        YieldResult {
            roll,
            events: self.run_evaluators(),
        }
    }

    /// One passive tick. Yields nothing while no tick-yield upgrade is owned.
    pub fn apply_tick(&mut self) -> YieldResult {
        let roll = resolve_tick(&self.state);
        self.state.credit_primary(roll.amount);
        YieldResult {
            roll,
            events: self.run_evaluators(),
        }
    }

    pub fn purchase_upgrade(&mut self, id: UpgradeId) -> PurchaseOutcome {
        let level = self.state.level(id);
        if level >= MAX_UPGRADE_LEVEL {
            return PurchaseOutcome::MaxedOut;
        }
        let cost = id.definition().cost(level);
        if self.state.primary_currency < cost {
            return PurchaseOutcome::InsufficientFunds {
                cost,
                available: self.state.primary_currency,
            };
        }

        let was_passive = self.passive_yield_active();
        self.state.debit_primary(cost);
        self.state.upgrades.insert(id, level + 1);
        self.state.refresh_derived(&self.config);

        let mut events = Vec::new();
        if !was_passive && self.passive_yield_active() {
            log::debug!("Passive yield started");
            events.push(ProgressEvent::PassiveYieldStarted);
        }
        events.extend(self.run_evaluators());

        PurchaseOutcome::Purchased {
            cost,
            new_level: level + 1,
            events,
        }
    }

    pub fn purchase_permanent_upgrade(&mut self, id: PermanentUpgradeId) -> PurchaseOutcome {
        let level = self.state.permanent_level(id);
        let Some(cost) = id.definition().cost(level) else {
            return PurchaseOutcome::MaxedOut;
        };
        if self.state.secondary_currency < cost {
            return PurchaseOutcome::InsufficientFunds {
                cost,
                available: self.state.secondary_currency,
            };
        }

        self.state.debit_secondary(cost);
        self.state.permanent_upgrades.insert(id, level + 1);
        self.state.refresh_derived(&self.config);

        PurchaseOutcome::Purchased {
            cost,
            new_level: level + 1,
            events: self.run_evaluators(),
        }
    }

    pub fn preview_prestige(&self) -> PrestigePreview {
        prestige::preview(&self.state, &self.config)
    }

    pub fn commit_prestige(&mut self) -> PrestigeOutcome {
        let was_passive = self.passive_yield_active();
        let Some(earned) = prestige::perform_prestige(&mut self.state, &self.config) else {
            return PrestigeOutcome::Rejected {
                preview: self.preview_prestige(),
            };
        };
        log::debug!(
            "Prestige committed: +{} pearls, {} on hand",
            earned,
            self.state.secondary_currency
        );

        let mut events = Vec::new();
        if was_passive {
            log::debug!("Passive yield stopped");
            events.push(ProgressEvent::PassiveYieldStopped);
        }
        events.extend(self.run_evaluators());
        PrestigeOutcome::Committed { earned, events }
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.state.muted = !self.state.muted;
        self.state.muted
    }

    pub fn select_cosmetic(
        &mut self,
        category: CosmeticCategory,
        item: &str,
    ) -> Result<(), ProgressionError> {
        if get_cosmetic(category, item).is_none() {
            return Err(ProgressionError::UnknownCosmetic {
                category,
                item: item.to_string(),
            });
        }
        if !self.state.cosmetics.is_unlocked(category, item) {
            return Err(ProgressionError::CosmeticLocked {
                category,
                item: item.to_string(),
            });
        }
        self.state
            .cosmetics
            .selected
            .insert(category, item.to_string());
        Ok(())
    }

    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Click => EventOutcome::Yield(self.apply_click()),
            InputEvent::Tick => EventOutcome::Yield(self.apply_tick()),
            InputEvent::Purchase(id) => EventOutcome::Purchase(self.purchase_upgrade(id)),
            InputEvent::PurchasePermanent(id) => {
                EventOutcome::Purchase(self.purchase_permanent_upgrade(id))
            }
            InputEvent::PreviewPrestige => EventOutcome::Preview(self.preview_prestige()),
            InputEvent::CommitPrestige => EventOutcome::Prestige(self.commit_prestige()),
            InputEvent::ToggleMute => EventOutcome::Muted(self.toggle_mute()),
            InputEvent::SelectCosmetic(category, item) => {
                EventOutcome::CosmeticSelected(self.select_cosmetic(category, &item))
            }
        }
    }

    /// Drain the queue in arrival order.
    pub fn process(&mut self, queue: &mut EventQueue) -> Vec<EventOutcome> {
        let mut outcomes = Vec::with_capacity(queue.len());
        while let Some(event) = queue.pop() {
            outcomes.push(self.handle(event));
        }
        outcomes
    }

    /// Write the current state. Failures are logged and returned; the controller
    /// keeps running either way.
    pub fn save_to(&mut self, store: &mut dyn BlobStore) -> Result<(), StoreError> {
        let result = save::save_state(store, &self.state);
        match &result {
            Ok(()) => self.cadence.reset_save_timer(),
            Err(e) => log::error!("Failed to save progress: {}", e),
        }
        result
    }

    /// Let `elapsed_ms` of wall-clock time pass: apply due ticks, then autosave if due.
    pub fn advance(&mut self, elapsed_ms: u64, store: &mut dyn BlobStore) -> AdvanceReport {
        let step = self.cadence.advance(elapsed_ms, self.passive_yield_active());
        let mut report = AdvanceReport {
            ticks: step.ticks,
            ..AdvanceReport::default()
        };
        for _ in 0..step.ticks {
            let result = self.apply_tick();
            report.fish_earned += result.roll.amount;
            report.events.extend(result.events);
        }
        if step.save_due {
            report.saved = self.save_to(store).is_ok();
        }
        report
    }

    /// Apply every pending achievement, DPS milestone and cosmetic unlock, and
    /// repair invalid cosmetic selections. Cosmetics go last since their rules read
    /// the milestone sets.
    fn run_evaluators(&mut self) -> Vec<ProgressEvent> {
        let mut events = Vec::new();

        for threshold in pending_achievements(&self.state, &self.config) {
            self.state.unlocked_achievements.insert(threshold);
            events.push(ProgressEvent::AchievementUnlocked { threshold });
        }
        for threshold in pending_dps_milestones(&self.state, &self.config) {
            self.state.unlocked_dps_milestones.insert(threshold);
            events.push(ProgressEvent::DpsMilestoneUnlocked { threshold });
        }
        for (category, item) in pending_unlocks(&self.state) {
            self.state.cosmetics.unlock(category, item);
            events.push(ProgressEvent::CosmeticUnlocked { category, item });
        }
        for (category, item) in pending_selection_fixes(&self.state) {
            self.state
                .cosmetics
                .selected
                .insert(category, item.to_string());
            events.push(ProgressEvent::SelectionReset { category, item });
        }

        events
    }
}
