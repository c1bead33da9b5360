//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`ActionError`, `RuneError`, `TurnError`, ...) live
//! next to the operations they validate. Every one of them is a plain value:
//! returning an error never leaves a creature half-mutated.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was well-formed but cannot happen right now.
    ///
    /// Examples: not enough MP for a skill, capture attempted after the battle ended.
    Recoverable,

    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: healing an enemy, rune slot 9, unknown skill index.
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: nobody alive can ever fill their attack gauge.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all battle-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics, logs and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
