use crate::error::{BattleFault, ErrorSeverity};

/// Errors from placing or removing runes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuneError {
    #[error("rune slot {slot} is outside 1..=8")]
    SlotOutOfRange { slot: u8 },

    #[error("rune slot {slot} is empty")]
    SlotEmpty { slot: u8 },
}

impl BattleFault for RuneError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotOutOfRange { .. } => "RUNE_SLOT_OUT_OF_RANGE",
            Self::SlotEmpty { .. } => "RUNE_SLOT_EMPTY",
        }
    }
}
