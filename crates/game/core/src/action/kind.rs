use bigdecimal::BigDecimal;

use crate::team::CombatantId;

/// What the mover does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "skill", rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    /// Attack another creature using attack vs defense.
    BasicAttack,
    /// Heal self for a fraction of max HP.
    BasicHeal,
    /// Use the skill at this index of the mover's skill list.
    UseSkill(usize),
}

/// An action addressed by battle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub actor: CombatantId,
    pub target: CombatantId,
    pub kind: ActionKind,
}

impl BattleAction {
    pub fn new(actor: CombatantId, target: CombatantId, kind: ActionKind) -> Self {
        Self {
            actor,
            target,
            kind,
        }
    }

    pub fn basic_attack(actor: CombatantId, target: CombatantId) -> Self {
        Self::new(actor, target, ActionKind::BasicAttack)
    }

    pub fn basic_heal(actor: CombatantId) -> Self {
        Self::new(actor, actor, ActionKind::BasicHeal)
    }

    pub fn skill(actor: CombatantId, target: CombatantId, index: usize) -> Self {
        Self::new(actor, target, ActionKind::UseSkill(index))
    }
}

/// Numeric effect of a resolved action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ActionOutcome {
    /// HP removed from the target (already floored at zero).
    Damaged { amount: BigDecimal },
    /// HP actually restored to the user.
    Healed { amount: BigDecimal },
    /// Percentages added to the user's attack-up / defense-up.
    Buffed { attack_pct: f64, defense_pct: f64 },
    /// Percentages added to the target's attack-down / defense-down.
    Debuffed { attack_pct: f64, defense_pct: f64 },
    /// The target resisted a debuff; MP was still spent.
    Resisted,
}
