//! Crit resolution for clicks; whole-number rounding for every yield.

use super::yields;
use crate::core::player_state::PlayerState;
use crate::economy::CRIT_SOURCE;
use rand::Rng;

/// One resolved yield, already floored to whole fish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldRoll {
    pub amount: f64,
    pub was_crit: bool,
    /// Crit multiplier applied (1.0 when no crit).
    pub multiplier: f64,
}

/// Roll a click. One draw decides the crit; a second draw picks the magnitude.
pub fn resolve_click<R: Rng + ?Sized>(state: &PlayerState, rng: &mut R) -> YieldRoll {
    let base = yields::actual_click_yield(state);
    let chance = yields::total_crit_chance(state);

    let roll: f64 = rng.gen();
    if roll < chance {
        let magnitude: f64 = rng.gen();
        let multiplier = CRIT_SOURCE
            .definition()
            .crit_multiplier(state.level(CRIT_SOURCE), magnitude);
        YieldRoll {
            amount: (base * multiplier).floor(),
            was_crit: true,
            multiplier,
        }
    } else {
        YieldRoll {
            amount: base.floor(),
            was_crit: false,
            multiplier: 1.0,
        }
    }
}

/// Passive yield never crits.
pub fn resolve_tick(state: &PlayerState) -> YieldRoll {
    YieldRoll {
        amount: yields::actual_tick_yield(state).floor(),
        was_crit: false,
        multiplier: 1.0,
    }
}
