//! Turn loop.
//!
//! The runner owns the roll source and the two side providers. Each turn it
//! asks the scheduler for a mover, asks that side's provider for a command,
//! hands the command to the engine and closes the turn. A command the engine
//! rejects forfeits the turn.

use battle_core::{
    Battle, BattleFault, BattleReport, BattleStatus, CombatantId, PcgRng, Side,
};

use crate::api::{ActionProvider, Result, RuntimeError, TurnCommand};
use crate::config::RuntimeConfig;
use crate::events::{BattleEvent, EventBus, Topic};

/// Drives battles to completion.
pub struct BattleRunner {
    config: RuntimeConfig,
    rng: PcgRng,
    team1: Option<Box<dyn ActionProvider>>,
    team2: Option<Box<dyn ActionProvider>>,
    events: EventBus,
}

impl BattleRunner {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            rng: PcgRng::new(config.seed),
            events: EventBus::with_capacity(config.event_buffer_size),
            config,
            team1: None,
            team2: None,
        }
    }

    /// Set the provider for team1 (the player side)
    pub fn set_team1_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.team1 = Some(Box::new(provider));
    }

    /// Set the provider for team2 (CPU trainer or wild creature)
    pub fn set_team2_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.team2 = Some(Box::new(provider));
    }

    #[must_use]
    pub fn with_providers(
        mut self,
        team1: impl ActionProvider + 'static,
        team2: impl ActionProvider + 'static,
    ) -> Self {
        self.set_team1_provider(team1);
        self.set_team2_provider(team2);
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<BattleEvent> {
        self.events.subscribe(topic)
    }

    fn provider(&self, side: Side) -> Result<&dyn ActionProvider> {
        let provider = match side {
            Side::Team1 => self.team1.as_deref(),
            Side::Team2 => self.team2.as_deref(),
        };
        provider.ok_or(RuntimeError::ProviderNotSet { side })
    }

    /// Runs `battle` until it reaches a terminal state.
    ///
    /// The battle is finished (participants restored) even when the run
    /// fails part-way.
    pub async fn run(&mut self, mut battle: Battle<'_>) -> Result<BattleReport> {
        self.provider(Side::Team1)?;
        self.provider(Side::Team2)?;

        tracing::info!(
            kind = %battle.kind(),
            team1 = battle.roster_of(Side::Team1).len(),
            team2 = battle.roster_of(Side::Team2).len(),
            "battle started"
        );
        self.events.publish(BattleEvent::Started {
            kind: battle.kind(),
            team1: battle.roster_of(Side::Team1).len(),
            team2: battle.roster_of(Side::Team2).len(),
            reward: battle.reward().clone(),
        });

        let outcome = self.drive(&mut battle).await;
        let report = battle.finish();

        match outcome {
            Ok(()) => {
                tracing::info!(
                    status = %report.status,
                    turns = report.turns,
                    survivors = report.survivors.len(),
                    "battle ended"
                );
                self.events.publish(BattleEvent::Ended {
                    status: report.status,
                    turns: report.turns,
                    reward: report.reward.clone(),
                    survivors: report.survivors.clone(),
                });
                Ok(report)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    code = err.error_code(),
                    turns = report.turns,
                    "battle aborted"
                );
                Err(err)
            }
        }
    }

    async fn drive(&mut self, battle: &mut Battle<'_>) -> Result<()> {
        let mut status = battle.check_outcome();
        while !status.is_terminal() {
            if battle.turns() >= self.config.max_turns {
                return Err(RuntimeError::TurnLimitExceeded {
                    limit: self.config.max_turns,
                });
            }
            status = self.step(battle).await?;
        }
        Ok(())
    }

    /// Plays one turn and returns the resulting status.
    pub async fn step(&mut self, battle: &mut Battle<'_>) -> Result<BattleStatus> {
        let actor = battle.advance_to_next_actor()?;
        let turn = battle.turns();
        let gauge = battle
            .creature(actor)
            .map(|c| c.stats.attack_gauge)
            .unwrap_or_default();
        tracing::debug!(turn, %actor, gauge, "turn started");
        self.events
            .publish(BattleEvent::TurnStarted { turn, actor, gauge });

        let command = self
            .provider(actor.side)?
            .provide_command(actor, battle)
            .await?;
        self.apply(battle, actor, turn, command);

        Ok(battle.end_turn())
    }

    fn apply(
        &mut self,
        battle: &mut Battle<'_>,
        actor: CombatantId,
        turn: u32,
        command: TurnCommand,
    ) {
        let event = match command {
            TurnCommand::Act(action) => match battle.resolve_action(action, &mut self.rng) {
                Ok(outcome) => {
                    tracing::debug!(
                        turn,
                        %actor,
                        kind = %action.kind,
                        target = %action.target,
                        ?outcome,
                        "action resolved"
                    );
                    BattleEvent::ActionResolved {
                        turn,
                        action,
                        outcome,
                    }
                }
                Err(err) => Self::rejected(turn, actor, &err),
            },
            TurnCommand::Capture(ball) => match battle.attempt_capture(&ball, &mut self.rng) {
                Ok(caught) => {
                    tracing::debug!(turn, %actor, ball = %ball.name, caught, "capture attempted");
                    BattleEvent::CaptureAttempted {
                        turn,
                        actor,
                        ball: ball.name,
                        caught,
                    }
                }
                Err(err) => Self::rejected(turn, actor, &err),
            },
            TurnCommand::Flee => match battle.flee() {
                Ok(()) => {
                    tracing::debug!(turn, %actor, "fled");
                    BattleEvent::Fled { turn, actor }
                }
                Err(err) => Self::rejected(turn, actor, &err),
            },
            TurnCommand::Pass => {
                tracing::debug!(turn, %actor, "passed");
                BattleEvent::Passed { turn, actor }
            }
        };
        self.events.publish(event);
    }

    fn rejected(turn: u32, actor: CombatantId, err: &impl BattleFault) -> BattleEvent {
        tracing::warn!(
            turn,
            %actor,
            error = %err,
            code = err.error_code(),
            "command rejected, turn forfeited"
        );
        BattleEvent::CommandRejected {
            turn,
            actor,
            code: err.error_code().to_string(),
            reason: err.to_string(),
        }
    }
}

impl std::fmt::Debug for BattleRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleRunner")
            .field("config", &self.config)
            .field("team1_provider", &self.team1.is_some())
            .field("team2_provider", &self.team2.is_some())
            .finish()
    }
}
