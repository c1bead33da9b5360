//! Unified error types surfaced by the runtime API.
//!
//! Wraps scheduler failures, provider failures and configuration problems so
//! clients can bubble them up with consistent context.
use battle_core::{BattleFault, CombatantId, ErrorSeverity, Side, TurnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} action provider not set")]
    ProviderNotSet { side: Side },

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("battle did not finish within {limit} turns")]
    TurnLimitExceeded { limit: u32 },

    #[error("scripted provider has no command left for {actor}")]
    ScriptExhausted { actor: CombatantId },

    #[error("action provider state was poisoned by a panicking caller")]
    ProviderPoisoned,

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

impl BattleFault for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Turn(err) => err.severity(),
            Self::ProviderNotSet { .. } | Self::InvalidEnv { .. } => ErrorSeverity::Validation,
            Self::TurnLimitExceeded { .. } | Self::ScriptExhausted { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::ProviderPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotSet { .. } => "RUNTIME_PROVIDER_NOT_SET",
            Self::Turn(err) => err.error_code(),
            Self::TurnLimitExceeded { .. } => "RUNTIME_TURN_LIMIT_EXCEEDED",
            Self::ScriptExhausted { .. } => "RUNTIME_SCRIPT_EXHAUSTED",
            Self::ProviderPoisoned => "RUNTIME_PROVIDER_POISONED",
            Self::InvalidEnv { .. } => "RUNTIME_INVALID_ENV",
        }
    }
}
