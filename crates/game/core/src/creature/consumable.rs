//! Consumable items used on creatures outside battle.

use super::Creature;
use crate::error::{BattleFault, ErrorSeverity};
use crate::stats::decimal;

/// Single-use item applied to one creature.
///
/// Item files spell these as RON enums: `ExpShard(exp: 100000.0)`, `LevelUpShard`.
#[derive(Clone, Debug, PartialEq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Consumable {
    /// Grants a fixed amount of experience, then levels up.
    ExpShard { exp: f64 },
    /// Sets experience to the current requirement, then levels up.
    LevelUpShard,
    /// Levels one chosen skill.
    SkillLevelUpShard,
    /// One-time evolution.
    EvolutionCandy,
}

/// Why a consumable could not be used. The creature is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableError {
    #[error("a skill must be chosen for a skill level-up shard")]
    SkillNotChosen,

    #[error("creature has no skill at index {index}")]
    UnknownSkill { index: usize },

    #[error("creature has already evolved")]
    AlreadyEvolved,
}

impl BattleFault for ConsumableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

impl Consumable {
    /// Uses the item on `creature`. `skill` picks the skill for a
    /// [`SkillLevelUpShard`](Self::SkillLevelUpShard) and is ignored otherwise.
    ///
    /// Returns the number of creature levels gained.
    pub fn apply(
        &self,
        creature: &mut Creature,
        skill: Option<usize>,
    ) -> Result<u32, ConsumableError> {
        match self {
            Self::ExpShard { exp } => Ok(creature.gain_exp(&decimal(*exp))),
            Self::LevelUpShard => {
                creature.stats.exp = creature.stats.required_exp.clone();
                Ok(creature.level_up())
            }
            Self::SkillLevelUpShard => {
                let index = skill.ok_or(ConsumableError::SkillNotChosen)?;
                if creature.level_up_skill(index) {
                    Ok(0)
                } else {
                    Err(ConsumableError::UnknownSkill { index })
                }
            }
            Self::EvolutionCandy => {
                if creature.evolve() {
                    Ok(0)
                } else {
                    Err(ConsumableError::AlreadyEvolved)
                }
            }
        }
    }
}
