use crate::action::ActionError;
use crate::error::{BattleFault, ErrorSeverity};

use super::turns::TurnError;

/// Errors from wild-battle commands (capture and flee).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptureError {
    #[error("only wild battles allow capturing or fleeing")]
    NotWildBattle,

    #[error("battle is already over")]
    BattleOver,

    #[error("it is not a team1 creature's turn")]
    NotPlayersTurn,

    #[error("the current mover has already acted")]
    AlreadyActed,
}

impl BattleFault for CaptureError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotWildBattle => ErrorSeverity::Validation,
            Self::BattleOver | Self::NotPlayersTurn | Self::AlreadyActed => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotWildBattle => "CAPTURE_NOT_WILD_BATTLE",
            Self::BattleOver => "CAPTURE_BATTLE_OVER",
            Self::NotPlayersTurn => "CAPTURE_NOT_PLAYERS_TURN",
            Self::AlreadyActed => "CAPTURE_ALREADY_ACTED",
        }
    }
}

/// Any error surfaced while driving a battle.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("turn scheduling failed: {0}")]
    Turn(#[from] TurnError),

    #[error("action rejected: {0}")]
    Action(#[from] ActionError),

    #[error("wild command rejected: {0}")]
    Capture(#[from] CaptureError),
}

impl BattleFault for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Turn(e) => e.severity(),
            Self::Action(e) => e.severity(),
            Self::Capture(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Turn(e) => e.error_code(),
            Self::Action(e) => e.error_code(),
            Self::Capture(e) => e.error_code(),
        }
    }
}
