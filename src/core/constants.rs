// Scheduling
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const AUTOSAVE_INTERVAL_MS: u64 = 10_000;

// Upgrade cost curve: floor(base * growth^level)
pub const COST_GROWTH_RATE: f64 = 1.5;
pub const CLICK_POWER_BASE_COST: f64 = 10.0;
pub const AUTO_FISHING_BASE_COST: f64 = 50.0;
pub const LUCKY_FISH_BASE_COST: f64 = 100.0;
pub const CAT_COMPANION_BASE_COST: f64 = 500.0;
/// Highest level a regular upgrade can reach; costs stay finite up to here.
pub const MAX_UPGRADE_LEVEL: u32 = 1_000;

// Crits
pub const CRIT_BASE_CHANCE: f64 = 0.05;
pub const CRIT_CHANCE_PER_LEVEL: f64 = 0.02;
pub const CRIT_MIN_MULTIPLIER: f64 = 2.0;
pub const CRIT_MIN_MULTIPLIER_STEP: f64 = 0.1;
pub const CRIT_MAX_MULTIPLIER: f64 = 5.0;
pub const CRIT_CHANCE_CAP: f64 = 1.0;

// Global multiplier (cat companion): 1 + level * bonus
pub const GLOBAL_MULTIPLIER_PER_LEVEL: f64 = 0.1;

// Prestige
pub const PRESTIGE_REQUIREMENT: f64 = 10_000.0;
pub const PRESTIGE_BONUS_PER_PEARL: f64 = 0.05;

// Permanent (pearl) upgrades
pub const PERMANENT_COST_GROWTH_RATE: f64 = 2.0;
pub const GOLDEN_ROD_BASE_COST: f64 = 1.0;
pub const GOLDEN_ROD_MAX_LEVEL: u32 = 10;
pub const GOLDEN_ROD_FACTOR_PER_LEVEL: f64 = 0.10;
pub const LUCKY_CHARM_BASE_COST: f64 = 2.0;
pub const LUCKY_CHARM_MAX_LEVEL: u32 = 5;
pub const LUCKY_CHARM_CRIT_PER_LEVEL: f64 = 0.02;
pub const ETERNAL_NET_COST: f64 = 5.0;
pub const ETERNAL_NET_FACTOR: f64 = 0.50;

// Milestones
pub const ACHIEVEMENT_THRESHOLDS: [u64; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];
pub const DPS_MILESTONE_THRESHOLDS: [u64; 5] = [10, 50, 100, 500, 1_000];

// Save format
pub const SAVE_VERSION: u32 = 2;
pub const LEGACY_SAVE_VERSION: u32 = 1;
pub const SAVE_KEY: &str = "catfish_save";
/// Blob name used by saves that predate the versioned schema.
pub const LEGACY_SAVE_KEY: &str = "catFishingGame";
