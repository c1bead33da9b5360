//! Action resolver.
//!
//! Validation happens in full before the first mutation:
//!
//! | action                  | target          | extra checks          |
//! |-------------------------|-----------------|-----------------------|
//! | basic attack            | another creature| -                     |
//! | basic heal              | user            | -                     |
//! | attack / debuff skill   | another creature| skill exists, MP      |
//! | heal / self-buff skill  | user            | skill exists, MP      |
//!
//! Skill MP is spent after the effect, including when a debuff is resisted.

use super::{ActionError, ActionKind, ActionOutcome};
use crate::combat::{basic_damage, basic_heal_amount, debuff_lands, skill_damage};
use crate::creature::Creature;
use crate::rng::RngOracle;
use crate::skill::SkillEffect;
use crate::stats::decimal;

/// Target of an action relative to the user.
#[derive(Debug)]
pub enum Target<'t> {
    /// The user targets itself.
    User,
    /// The user targets a different creature.
    Other(&'t mut Creature),
}

impl<'t> Target<'t> {
    fn other(self) -> Result<&'t mut Creature, ActionError> {
        match self {
            Self::Other(creature) => Ok(creature),
            Self::User => Err(ActionError::TargetIsSelf),
        }
    }

    fn require_user(&self) -> Result<(), ActionError> {
        match self {
            Self::User => Ok(()),
            Self::Other(_) => Err(ActionError::TargetNotSelf),
        }
    }
}

/// Resolves `kind` performed by `user` on `target`.
pub fn resolve(
    kind: ActionKind,
    user: &mut Creature,
    target: Target<'_>,
    rng: &mut impl RngOracle,
) -> Result<ActionOutcome, ActionError> {
    match kind {
        ActionKind::BasicAttack => {
            let target = target.other()?;
            let amount = basic_damage(&user.stats, &target.stats);
            target.stats.take_damage(&amount);
            Ok(ActionOutcome::Damaged { amount })
        }
        ActionKind::BasicHeal => {
            target.require_user()?;
            let amount = basic_heal_amount(&user.stats);
            Ok(ActionOutcome::Healed {
                amount: user.stats.heal(&amount),
            })
        }
        ActionKind::UseSkill(index) => use_skill(index, user, target, rng),
    }
}

fn use_skill(
    index: usize,
    user: &mut Creature,
    target: Target<'_>,
    rng: &mut impl RngOracle,
) -> Result<ActionOutcome, ActionError> {
    let skill = user.skill(index).ok_or(ActionError::UnknownSkill { index })?;
    let cost = skill.cost();
    if !skill.is_affordable(&user.stats.mp) {
        return Err(ActionError::InsufficientMp {
            required: cost,
            available: user.stats.mp.clone(),
        });
    }
    let effect = skill.effect().clone();

    let outcome = match effect {
        SkillEffect::Attack {
            multiplier,
            ignores_defense,
        } => {
            let target = target.other()?;
            let amount = skill_damage(&multiplier, ignores_defense, &user.stats, &target.stats);
            target.stats.take_damage(&amount);
            ActionOutcome::Damaged { amount }
        }
        SkillEffect::Heal { amount } => {
            target.require_user()?;
            ActionOutcome::Healed {
                amount: user.stats.heal(&decimal(amount)),
            }
        }
        SkillEffect::SelfBuff {
            attack_pct,
            defense_pct,
        } => {
            target.require_user()?;
            user.stats.modifiers.buff(attack_pct, defense_pct);
            ActionOutcome::Buffed {
                attack_pct,
                defense_pct,
            }
        }
        SkillEffect::EnemyDebuff {
            attack_pct,
            defense_pct,
        } => {
            let target = target.other()?;
            if debuff_lands(&user.stats, &target.stats, rng) {
                target.stats.modifiers.debuff(attack_pct, defense_pct);
                ActionOutcome::Debuffed {
                    attack_pct,
                    defense_pct,
                }
            } else {
                ActionOutcome::Resisted
            }
        }
    };

    user.stats.spend_mp(&cost);
    Ok(outcome)
}
