//! Integration test: saving and loading through the blob stores.
//!
//! Covers round-trips of reachable states, file-backed storage, legacy blobs and
//! damaged input.

use catfish::save::{decode, encode, load_state, save_state};
use catfish::{
    BlobStore, CosmeticCategory, FileStore, GameConfig, MemoryStore, PermanentUpgradeId,
    PlayerState, ProgressionController, UpgradeId,
};
use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use std::sync::atomic::{AtomicU64, Ordering};

fn temp_store() -> FileStore {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "catfish-roundtrip-{}-{}",
        std::process::id(),
        id
    ));
    FileStore::at(dir).expect("temp dir")
}

/// A state reached by actually playing, so every invariant holds.
fn played_state(clicks: u32, buys: &[UpgradeId]) -> PlayerState {
    let mut c = ProgressionController::with_rng(
        PlayerState::default(),
        GameConfig::default(),
        StepRng::new(u64::MAX, 0),
    );
    for _ in 0..clicks {
        c.apply_click();
    }
    for &id in buys {
        c.purchase_upgrade(id);
    }
    c.into_state()
}

#[test]
fn test_controller_state_survives_file_store() {
    let mut store = temp_store();
    let mut c = ProgressionController::with_rng(
        PlayerState {
            primary_currency: 30_000.0,
            total_primary_earned: 30_000.0,
            ..PlayerState::default()
        },
        GameConfig::default(),
        StepRng::new(u64::MAX, 0),
    );
    c.purchase_upgrade(UpgradeId::AutoFishing);
    c.purchase_upgrade(UpgradeId::CatCompanion);
    c.commit_prestige();
    c.purchase_permanent_upgrade(PermanentUpgradeId::GoldenRod);
    c.select_cosmetic(CosmeticCategory::Background, "ocean")
        .expect("ocean unlocks with the first pearl");
    c.toggle_mute();
    c.save_to(&mut store).expect("save");

    let loaded = ProgressionController::load(&store, GameConfig::default());
    assert_eq!(loaded.state(), c.state());
    assert!(loaded.state().muted);
    assert_eq!(
        loaded
            .state()
            .cosmetics
            .selected_or_default(CosmeticCategory::Background),
        "ocean"
    );

    let _ = std::fs::remove_dir_all(store.dir());
}

#[test]
fn test_missing_save_starts_fresh() {
    let store = temp_store();
    assert_eq!(
        load_state(&store, &GameConfig::default()),
        PlayerState::default()
    );
    let _ = std::fs::remove_dir_all(store.dir());
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let mut store = temp_store();
    store
        .write(catfish::core::constants::SAVE_KEY, "{\"primaryCurrency\": 12, \"upgr")
        .expect("write");
    assert_eq!(
        load_state(&store, &GameConfig::default()),
        PlayerState::default()
    );
    let _ = std::fs::remove_dir_all(store.dir());
}

#[test]
fn test_legacy_browser_save_migrates() {
    let legacy = r#"{
        "fish": 1500,
        "totalFishEarned": 42000,
        "fishPerClick": 3,
        "prestigeLevel": 2,
        "prestigeBonus": 0.1,
        "upgrades": {
            "clickPower": { "level": 2 },
            "autoFishing": { "level": 4 },
            "luckyFish": { "level": 0 },
            "catCompanion": { "level": 1 }
        },
        "unlockedAchievements": [100, 1000, 10000],
        "muted": false
    }"#;
    let store = MemoryStore::new().with_blob(catfish::core::constants::LEGACY_SAVE_KEY, legacy);
    let c = ProgressionController::load(&store, GameConfig::default());
    let state = c.state();

    assert_eq!(state.primary_currency, 1_500.0);
    // 42k since the last prestige plus 10k for each earlier prestige
    assert_eq!(state.total_primary_earned, 62_000.0);
    assert_eq!(state.secondary_currency, 2.0);
    assert_eq!(state.level(UpgradeId::AutoFishing), 4);
    assert!((state.global_multiplier - 1.1).abs() < 1e-12);
    assert!(c.passive_yield_active());
    // Same payout the old save would have offered for 42k fish
    assert_eq!(c.preview_prestige().earnable, 4.0);

    // Re-saving writes the current schema
    let mut store = store;
    save_state(&mut store, state).expect("save");
    let blob = store
        .get(catfish::core::constants::SAVE_KEY)
        .expect("current key written");
    let value: serde_json::Value = serde_json::from_str(blob).expect("json");
    assert_eq!(value["version"], 2);
    assert_eq!(value["secondaryEarnedTotal"], 2.0);
    assert!(value.get("fish").is_none());
}

#[test]
fn test_empty_blobs_are_defaults() {
    assert_eq!(decode(""), PlayerState::default());
    assert_eq!(decode("{}"), PlayerState::default());
}

proptest! {
    #[test]
    fn prop_roundtrip_of_played_states(
        clicks in 0u32..400,
        buys in proptest::collection::vec(
            prop_oneof![
                Just(UpgradeId::ClickPower),
                Just(UpgradeId::AutoFishing),
                Just(UpgradeId::LuckyFish),
                Just(UpgradeId::CatCompanion),
            ],
            0..8,
        ),
    ) {
        let state = played_state(clicks, &buys);
        let blob = encode(&state).expect("encode");
        prop_assert_eq!(decode(&blob), state);
    }

    #[test]
    fn prop_roundtrip_of_arbitrary_balances(
        fish in 0u64..1_000_000_000,
        extra in 0u64..1_000_000_000,
        pearls in 0u32..500,
        spent in 0u32..500,
        muted in any::<bool>(),
    ) {
        let mut state = PlayerState {
            primary_currency: fish as f64,
            total_primary_earned: (fish + extra) as f64,
            secondary_currency: pearls as f64,
            secondary_earned_total: (pearls + spent) as f64,
            muted,
            ..PlayerState::default()
        };
        state.refresh_derived(&GameConfig::default());
        let blob = encode(&state).expect("encode");
        prop_assert_eq!(decode(&blob), state);
    }

    #[test]
    fn prop_decode_never_panics(blob in ".{0,200}") {
        let state = decode(&blob);
        prop_assert!(state.primary_currency >= 0.0);
        prop_assert!(state.total_primary_earned >= state.primary_currency);
    }
}
