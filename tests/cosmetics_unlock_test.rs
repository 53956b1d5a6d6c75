//! Integration test: cosmetic unlocks driven by play.

use catfish::cosmetics::{get_cosmetics_by_category, ALL_COSMETICS};
use catfish::{
    CosmeticCategory, EventOutcome, GameConfig, InputEvent, PlayerState, ProgressEvent,
    ProgressionController, ProgressionError, PurchaseOutcome, UpgradeId,
};
use rand::rngs::mock::StepRng;

fn never_crit(state: PlayerState) -> ProgressionController<StepRng> {
    ProgressionController::with_rng(state, GameConfig::default(), StepRng::new(u64::MAX, 0))
}

fn unlocked_items(events: &[ProgressEvent]) -> Vec<(CosmeticCategory, &'static str)> {
    events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::CosmeticUnlocked { category, item } => Some((*category, *item)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_every_category_has_items_beyond_default() {
    for category in CosmeticCategory::ALL {
        assert!(get_cosmetics_by_category(category).count() >= 2);
    }
    assert_eq!(ALL_COSMETICS.len(), 11);
}

#[test]
fn test_straw_hat_unlocks_on_the_thousandth_fish() {
    let mut c = never_crit(PlayerState {
        primary_currency: 999.0,
        total_primary_earned: 999.0,
        ..PlayerState::default()
    });
    let result = c.apply_click();
    assert_eq!(
        result.events,
        vec![
            ProgressEvent::AchievementUnlocked { threshold: 1_000 },
            ProgressEvent::CosmeticUnlocked {
                category: CosmeticCategory::Hat,
                item: "strawHat",
            },
        ]
    );
    assert!(c.apply_click().events.is_empty());
}

#[test]
fn test_carbon_rod_unlocks_at_click_power_ten() {
    let mut state = PlayerState {
        primary_currency: 1_000_000.0,
        total_primary_earned: 1_000_000.0,
        ..PlayerState::default()
    };
    state.upgrades.insert(UpgradeId::ClickPower, 9);
    let mut c = never_crit(state);
    assert!(!c.state().cosmetics.is_unlocked(CosmeticCategory::Rod, "carbon"));

    let PurchaseOutcome::Purchased { events, .. } = c.purchase_upgrade(UpgradeId::ClickPower)
    else {
        panic!("a million fish buys the tenth level");
    };
    assert_eq!(unlocked_items(&events), vec![(CosmeticCategory::Rod, "carbon")]);
}

#[test]
fn test_dps_milestone_unlocks_golden_rod_in_same_transition() {
    let mut state = PlayerState {
        primary_currency: 1.0e20,
        total_primary_earned: 1.0e20,
        ..PlayerState::default()
    };
    state.upgrades.insert(UpgradeId::AutoFishing, 99);
    let mut c = never_crit(state);
    assert!(c.state().unlocked_dps_milestones.contains(&50));
    assert!(!c.state().unlocked_dps_milestones.contains(&100));

    let PurchaseOutcome::Purchased { events, .. } = c.purchase_upgrade(UpgradeId::AutoFishing)
    else {
        panic!("purchase should succeed");
    };
    assert!(events.contains(&ProgressEvent::DpsMilestoneUnlocked { threshold: 100 }));
    assert!(events.contains(&ProgressEvent::CosmeticUnlocked {
        category: CosmeticCategory::Rod,
        item: "golden",
    }));
    c.select_cosmetic(CosmeticCategory::Rod, "golden")
        .expect("golden rod just unlocked");
}

#[test]
fn test_cosmetics_survive_prestige() {
    let mut c = never_crit(PlayerState {
        primary_currency: 10_000.0,
        total_primary_earned: 10_000.0,
        ..PlayerState::default()
    });
    c.select_cosmetic(CosmeticCategory::Background, "river")
        .expect("river unlocked at 10k");
    c.commit_prestige();
    assert_eq!(
        c.state()
            .cosmetics
            .selected_or_default(CosmeticCategory::Background),
        "river"
    );
}

#[test]
fn test_selection_through_event_queue() {
    let mut c = never_crit(PlayerState::default());
    let outcome = c.handle(InputEvent::SelectCosmetic(
        CosmeticCategory::Hat,
        "crown".to_string(),
    ));
    assert_eq!(
        outcome,
        EventOutcome::CosmeticSelected(Err(ProgressionError::CosmeticLocked {
            category: CosmeticCategory::Hat,
            item: "crown".to_string(),
        }))
    );
    assert_eq!(
        c.handle(InputEvent::SelectCosmetic(
            CosmeticCategory::Hat,
            "none".to_string()
        )),
        EventOutcome::CosmeticSelected(Ok(()))
    );
}
