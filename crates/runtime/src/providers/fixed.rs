//! Deterministic providers for fixtures, replays and simple opponents.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use battle_core::{Battle, BattleAction, CombatantId};

use crate::api::{ActionProvider, Result, RuntimeError, TurnCommand};

/// Always passes. Useful for training dummies and as a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassProvider;

#[async_trait]
impl ActionProvider for PassProvider {
    async fn provide_command(
        &self,
        _actor: CombatantId,
        _battle: &Battle<'_>,
    ) -> Result<TurnCommand> {
        Ok(TurnCommand::Pass)
    }
}

/// Basic-attacks the first living opponent, passing when none is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAttackProvider;

#[async_trait]
impl ActionProvider for BasicAttackProvider {
    async fn provide_command(
        &self,
        actor: CombatantId,
        battle: &Battle<'_>,
    ) -> Result<TurnCommand> {
        let target = battle
            .living_combatants()
            .find(|id| id.side == actor.side.opponent());

        Ok(match target {
            Some(target) => TurnCommand::Act(BattleAction::basic_attack(actor, target)),
            None => TurnCommand::Pass,
        })
    }
}

/// Replays a fixed command list in order.
///
/// Runs out with [`RuntimeError::ScriptExhausted`] unless constructed with
/// [`then_pass`](Self::then_pass).
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    commands: Mutex<VecDeque<TurnCommand>>,
    pass_when_empty: bool,
}

impl ScriptedProvider {
    pub fn new(commands: impl IntoIterator<Item = TurnCommand>) -> Self {
        Self {
            commands: Mutex::new(commands.into_iter().collect()),
            pass_when_empty: false,
        }
    }

    /// Pass instead of failing once the script is used up.
    #[must_use]
    pub fn then_pass(mut self) -> Self {
        self.pass_when_empty = true;
        self
    }

    /// Commands not yet handed out.
    pub fn remaining(&self) -> usize {
        self.commands.lock().map(|queue| queue.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ActionProvider for ScriptedProvider {
    async fn provide_command(
        &self,
        actor: CombatantId,
        _battle: &Battle<'_>,
    ) -> Result<TurnCommand> {
        let next = self
            .commands
            .lock()
            .map_err(|_| RuntimeError::ProviderPoisoned)?
            .pop_front();

        match next {
            Some(command) => Ok(command),
            None if self.pass_when_empty => Ok(TurnCommand::Pass),
            None => Err(RuntimeError::ScriptExhausted { actor }),
        }
    }
}
