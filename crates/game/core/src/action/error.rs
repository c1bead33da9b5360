//! Action validation errors.

use bigdecimal::BigDecimal;

use crate::error::{BattleFault, ErrorSeverity};
use crate::team::CombatantId;

/// Why an action was rejected. Nothing is mutated when one of these is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// This action cannot target the user itself.
    #[error("action must target another creature")]
    TargetIsSelf,

    /// This action can only target the user itself.
    #[error("action must target the user itself")]
    TargetNotSelf,

    /// Skill index outside the user's skill list.
    #[error("user has no skill at index {index}")]
    UnknownSkill { index: usize },

    #[error("skill costs {required} MP but only {available} is available")]
    InsufficientMp {
        required: BigDecimal,
        available: BigDecimal,
    },

    /// Actor is not the creature whose turn it is.
    #[error("{actor} is not the current mover")]
    NotActorsTurn { actor: CombatantId },

    /// The current mover already used its action this turn.
    #[error("the current mover has already acted")]
    AlreadyActed,

    /// No mover has been selected yet.
    #[error("no creature is due to act")]
    NoCurrentMover,

    #[error("no combatant at {id}")]
    UnknownCombatant { id: CombatantId },

    #[error("battle is already over")]
    BattleOver,
}

impl BattleFault for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            TargetIsSelf | TargetNotSelf | UnknownSkill { .. } | UnknownCombatant { .. } => {
                ErrorSeverity::Validation
            }
            InsufficientMp { .. } | NotActorsTurn { .. } | AlreadyActed | NoCurrentMover => {
                ErrorSeverity::Recoverable
            }
            BattleOver => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            TargetIsSelf => "ACTION_TARGET_IS_SELF",
            TargetNotSelf => "ACTION_TARGET_NOT_SELF",
            UnknownSkill { .. } => "ACTION_UNKNOWN_SKILL",
            InsufficientMp { .. } => "ACTION_INSUFFICIENT_MP",
            NotActorsTurn { .. } => "ACTION_NOT_ACTORS_TURN",
            AlreadyActed => "ACTION_ALREADY_ACTED",
            NoCurrentMover => "ACTION_NO_CURRENT_MOVER",
            UnknownCombatant { .. } => "ACTION_UNKNOWN_COMBATANT",
            BattleOver => "ACTION_BATTLE_OVER",
        }
    }
}
