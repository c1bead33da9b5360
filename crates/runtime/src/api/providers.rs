//! Asynchronous abstraction for sourcing battle commands.
//!
//! Runtime users plug in [`ActionProvider`] implementations so battles can run
//! with human input, scripted fixtures, or AI policies.
use async_trait::async_trait;
use battle_core::{Ball, Battle, BattleAction, CombatantId};
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// One command for the creature whose turn it is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnCommand {
    /// Basic attack, basic heal or skill.
    Act(BattleAction),
    /// Throw a ball at the wild creature (wild battles, team1 only).
    Capture(Ball),
    /// Run from a wild battle (team1 only).
    Flee,
    /// Do nothing this turn.
    Pass,
}

/// Trait for choosing a command for the current mover.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - CPU trainers and wild creatures
/// - Scripted/replayed commands
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide a command for `actor` given a read-only view of the battle.
    ///
    /// A command the engine rejects forfeits the turn; it does not end the
    /// battle.
    async fn provide_command(&self, actor: CombatantId, battle: &Battle<'_>)
    -> Result<TurnCommand>;
}
