//! Enemy-debuff resist check.

use crate::config::BattleConfig;
use crate::rng::RngOracle;
use crate::stats::{StatBlock, to_f64};

/// Chance that a debuff is resisted.
///
/// `max(0.15, resistance − accuracy)`: the floor applies whenever accuracy
/// beats resistance or the gap is at most 0.15.
pub fn resist_chance(user: &StatBlock, target: &StatBlock) -> f64 {
    let gap = to_f64(&(&target.resistance - &user.accuracy));
    if user.accuracy > target.resistance || gap <= BattleConfig::MIN_RESIST_CHANCE {
        BattleConfig::MIN_RESIST_CHANCE
    } else {
        gap
    }
}

/// Draws one roll; the debuff lands when `roll >= resist_chance`.
pub fn debuff_lands(user: &StatBlock, target: &StatBlock, rng: &mut impl RngOracle) -> bool {
    rng.uniform() >= resist_chance(user, target)
}
