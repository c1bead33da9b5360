//! Player policy for wild battles: weaken, then throw.

use async_trait::async_trait;
use battle_core::{Ball, Battle, BattleKind, CombatantId};
use battle_runtime::{ActionProvider, RandomPolicyProvider, Result, TurnCommand};

/// Throws `ball` whenever the wild creature's health fraction is at or below
/// `throw_below`; otherwise plays the random policy.
#[derive(Debug)]
pub struct HunterProvider {
    ball: Ball,
    throw_below: f64,
    fallback: RandomPolicyProvider,
}

impl HunterProvider {
    pub fn new(ball: Ball, throw_below: f64, fallback: RandomPolicyProvider) -> Self {
        Self {
            ball,
            throw_below,
            fallback,
        }
    }

    fn should_throw(&self, battle: &Battle<'_>) -> bool {
        if battle.kind() != BattleKind::Wild {
            return false;
        }
        battle
            .creature(CombatantId::team2(0))
            .is_some_and(|wild| {
                wild.is_alive() && 1.0 - wild.stats.hp_loss_fraction() <= self.throw_below
            })
    }
}

#[async_trait]
impl ActionProvider for HunterProvider {
    async fn provide_command(
        &self,
        actor: CombatantId,
        battle: &Battle<'_>,
    ) -> Result<TurnCommand> {
        if self.should_throw(battle) {
            tracing::debug!(%actor, ball = %self.ball.name, "throwing ball");
            return Ok(TurnCommand::Capture(self.ball.clone()));
        }
        self.fallback.provide_command(actor, battle).await
    }
}
