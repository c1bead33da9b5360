//! Damage and heal amounts.

use bigdecimal::{BigDecimal, Zero};

use crate::config::BattleConfig;
use crate::skill::DamageMultiplier;
use crate::stats::{StatBlock, decimal};

/// Damage dealt by a basic attack.
///
/// # Formula
///
/// ```text
/// raw    = user.attack · (1 + atk_up/100 − atk_down/100)
///        − target.defense · (1 + def_up/100 − def_down/100)
/// damage = max(raw, 0)
/// ```
pub fn basic_damage(user: &StatBlock, target: &StatBlock) -> BigDecimal {
    floor_at_zero(user.effective_attack() - target.effective_defense())
}

/// Damage dealt by an attack skill.
///
/// Unless the skill ignores defense, the target's raw (unmodified) defense is
/// subtracted once more after the weighted sum.
pub fn skill_damage(
    multiplier: &DamageMultiplier,
    ignores_defense: bool,
    user: &StatBlock,
    target: &StatBlock,
) -> BigDecimal {
    let mut raw = multiplier.weighted_sum(user, target);
    if !ignores_defense {
        raw -= &target.defense;
    }
    floor_at_zero(raw)
}

/// HP restored by a basic heal: 5% of the user's max HP.
pub fn basic_heal_amount(user: &StatBlock) -> BigDecimal {
    &user.max_hp * decimal(BattleConfig::BASIC_HEAL_FRACTION)
}

fn floor_at_zero(raw: BigDecimal) -> BigDecimal {
    raw.max(BigDecimal::zero())
}
