//! Skill catalog.
//!
//! Skills are plain values: each creature owns its own instances and levels
//! them independently. The four variants are matched exhaustively by the
//! action resolver.
//!
//! Costs, heal amounts and coefficients are authored numbers and stay `f64`;
//! they become exact decimals where they touch a [`StatBlock`](crate::StatBlock).

mod multiplier;

use bigdecimal::BigDecimal;

use crate::stats::decimal;

pub use multiplier::DamageMultiplier;

/// Coarse skill category, used for targeting and display.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillCategory {
    Attack,
    Heal,
    SelfBuff,
    EnemyDebuff,
}

impl SkillCategory {
    /// Attack and debuff skills act on an opponent; the rest act on the user.
    pub fn targets_opponent(self) -> bool {
        matches!(self, Self::Attack | Self::EnemyDebuff)
    }
}

/// Effect payload of a skill.
///
/// Externally tagged, so content files spell it as a RON enum:
/// `Attack(multiplier: (self_attack: 1.2), ignores_defense: false)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    Attack {
        multiplier: DamageMultiplier,
        #[cfg_attr(feature = "serde", serde(default))]
        ignores_defense: bool,
    },
    Heal {
        amount: f64,
    },
    SelfBuff {
        attack_pct: f64,
        defense_pct: f64,
    },
    EnemyDebuff {
        attack_pct: f64,
        defense_pct: f64,
    },
}

impl SkillEffect {
    pub fn category(&self) -> SkillCategory {
        match self {
            Self::Attack { .. } => SkillCategory::Attack,
            Self::Heal { .. } => SkillCategory::Heal,
            Self::SelfBuff { .. } => SkillCategory::SelfBuff,
            Self::EnemyDebuff { .. } => SkillCategory::EnemyDebuff,
        }
    }
}

/// A skill instance owned by one creature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub mp_cost: f64,
    #[cfg_attr(feature = "serde", serde(default = "Skill::initial_level"))]
    level: u32,
    effect: SkillEffect,
}

impl Skill {
    pub fn new(name: impl Into<String>, mp_cost: f64, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            mp_cost,
            level: Self::initial_level(),
            effect,
        }
    }

    pub fn attack(
        name: impl Into<String>,
        mp_cost: f64,
        multiplier: DamageMultiplier,
        ignores_defense: bool,
    ) -> Self {
        Self::new(
            name,
            mp_cost,
            SkillEffect::Attack {
                multiplier,
                ignores_defense,
            },
        )
    }

    pub fn heal(name: impl Into<String>, mp_cost: f64, amount: f64) -> Self {
        Self::new(name, mp_cost, SkillEffect::Heal { amount })
    }

    pub fn self_buff(
        name: impl Into<String>,
        mp_cost: f64,
        attack_pct: f64,
        defense_pct: f64,
    ) -> Self {
        Self::new(
            name,
            mp_cost,
            SkillEffect::SelfBuff {
                attack_pct,
                defense_pct,
            },
        )
    }

    pub fn enemy_debuff(
        name: impl Into<String>,
        mp_cost: f64,
        attack_pct: f64,
        defense_pct: f64,
    ) -> Self {
        Self::new(
            name,
            mp_cost,
            SkillEffect::EnemyDebuff {
                attack_pct,
                defense_pct,
            },
        )
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn initial_level() -> u32 {
        1
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn effect(&self) -> &SkillEffect {
        &self.effect
    }

    pub fn category(&self) -> SkillCategory {
        self.effect.category()
    }

    /// MP cost as an exact decimal.
    pub fn cost(&self) -> BigDecimal {
        decimal(self.mp_cost)
    }

    pub fn is_affordable(&self, mp: &BigDecimal) -> bool {
        *mp >= self.cost()
    }

    /// Raises the skill level.
    ///
    /// Attack skills scale every damage coefficient by 1.25 and heal skills
    /// double their amount. Buff and debuff skills only gain the level number.
    pub fn level_up(&mut self) {
        self.level += 1;
        match &mut self.effect {
            SkillEffect::Attack { multiplier, .. } => multiplier.level_up(),
            SkillEffect::Heal { amount } => *amount *= 2.0,
            SkillEffect::SelfBuff { .. } | SkillEffect::EnemyDebuff { .. } => {}
        }
    }
}
